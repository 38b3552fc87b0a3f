//! Frame-driven animation driver.
//!
//! The animator owns the current [`Transition`] and elapsed time. The host
//! calls [`Animator::on_bounds_changed`] when the image or viewport changes
//! and [`Animator::tick`] once per paint cycle; each active tick yields a
//! [`FrameUpdate`] with the transform to render and a redraw hint. Everything
//! runs on the host's render thread; nothing here blocks or schedules.

use crate::{
    generator::{RandomTransitionGenerator, TransitionGenerator},
    geom::{Affine, Rect, RectExt as _},
    transform::compute_transform,
    transition::Transition,
};

pub const MILLIS_PER_SECOND: u64 = 1000;
pub const TARGET_FPS: u64 = 60;
/// Non-binding redraw hint carried in every [`FrameUpdate`].
pub const FRAME_DELAY_MS: u64 = MILLIS_PER_SECOND / TARGET_FPS;

/// Lifecycle notifications, best-effort: an absent observer is not an error,
/// and a transition discarded by a bounds change ends silently.
pub trait TransitionObserver {
    fn on_transition_start(&mut self, _transition: &Transition) {}
    fn on_transition_end(&mut self, _transition: &Transition) {}
}

/// Observable driver state, derived from bounds and the active transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AnimatorState {
    /// Image or viewport bounds are absent (degenerate).
    Idle,
    /// Both bounds are valid but no transition is active.
    BoundsReady,
    /// A transition is in flight.
    Transitioning,
}

/// Per-tick output for the host renderer.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct FrameUpdate {
    /// The interpolated crop rect, in image space.
    pub crop: Rect,
    /// Transform mapping the image onto the viewport for this frame.
    pub transform: Affine,
    /// Suggested delay until the next tick, in milliseconds.
    pub redraw_in_ms: u64,
}

pub struct Animator {
    generator: Box<dyn TransitionGenerator>,
    observer: Option<Box<dyn TransitionObserver>>,
    image_bounds: Rect,
    viewport_bounds: Rect,
    current: Option<Transition>,
    elapsed_ms: u64,
    last_tick_ms: Option<u64>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Box::new(RandomTransitionGenerator::default()))
    }
}

impl Animator {
    pub fn new(generator: Box<dyn TransitionGenerator>) -> Self {
        Self {
            generator,
            observer: None,
            image_bounds: Rect::ZERO,
            viewport_bounds: Rect::ZERO,
            current: None,
            elapsed_ms: 0,
            last_tick_ms: None,
        }
    }

    /// Record new image/viewport bounds from the host.
    ///
    /// Any in-flight transition is discarded silently; if both bounds are
    /// valid a fresh one starts immediately, otherwise the animator idles.
    pub fn on_bounds_changed(&mut self, image_bounds: Rect, viewport_bounds: Rect) {
        self.image_bounds = image_bounds;
        self.viewport_bounds = viewport_bounds;
        self.current = None;
        self.elapsed_ms = 0;
        // The first tick after a restart contributes no elapsed time; a stale
        // timestamp from before the bounds change must not fast-forward the
        // fresh transition.
        self.last_tick_ms = None;

        if self.has_bounds() {
            self.start_new_transition();
        }
    }

    /// Advance the animation to `now_ms` and produce this frame's output.
    ///
    /// Returns `None` while idle (no transform to render). On completion the
    /// final clamped frame is still emitted, then the end notification fires
    /// and the next transition starts within the same tick so there is no
    /// visible stall.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, now_ms: u64) -> Option<FrameUpdate> {
        let delta = self
            .last_tick_ms
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_tick_ms = Some(now_ms);

        if !self.has_bounds() {
            return None;
        }

        if self.current.is_some() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta);
        } else {
            // Lazy start: bounds arrived before the generator was swapped in,
            // or the previous generator failed. Elapsed time starts at zero.
            self.start_new_transition();
        }

        let transition = self.current?;
        let crop = transition.rect_at(self.elapsed_ms);
        let update = FrameUpdate {
            crop,
            transform: compute_transform(self.image_bounds, self.viewport_bounds, crop),
            redraw_in_ms: FRAME_DELAY_MS,
        };

        if self.elapsed_ms >= transition.duration_ms() {
            self.current = None;
            if let Some(observer) = self.observer.as_mut() {
                observer.on_transition_end(&transition);
            }
            self.start_new_transition();
        }

        Some(update)
    }

    /// Swap the generation strategy, restarting immediately when bounds allow.
    pub fn set_generator(&mut self, generator: Box<dyn TransitionGenerator>) {
        self.generator = generator;
        self.current = None;
        self.elapsed_ms = 0;
        self.last_tick_ms = None;
        if self.has_bounds() {
            self.start_new_transition();
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn TransitionObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn state(&self) -> AnimatorState {
        if !self.has_bounds() {
            AnimatorState::Idle
        } else if self.current.is_some() {
            AnimatorState::Transitioning
        } else {
            AnimatorState::BoundsReady
        }
    }

    pub fn current_transition(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn image_bounds(&self) -> Rect {
        self.image_bounds
    }

    pub fn viewport_bounds(&self) -> Rect {
        self.viewport_bounds
    }

    fn has_bounds(&self) -> bool {
        !self.image_bounds.is_degenerate() && !self.viewport_bounds.is_degenerate()
    }

    fn start_new_transition(&mut self) {
        // Generation failure is not propagated; the animator stays in
        // BoundsReady and retries on the next tick.
        match self
            .generator
            .generate_next_transition(self.image_bounds, self.viewport_bounds)
        {
            Ok(transition) => {
                self.elapsed_ms = 0;
                self.current = Some(transition);
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_transition_start(&transition);
                }
            }
            Err(_) => {
                self.current = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_animator() -> Animator {
        let mut animator = Animator::new(Box::new(RandomTransitionGenerator::seeded(9)));
        animator.on_bounds_changed(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Rect::new(0.0, 0.0, 400.0, 300.0),
        );
        animator
    }

    #[test]
    fn starts_idle_without_bounds() {
        let mut animator = Animator::default();
        assert_eq!(animator.state(), AnimatorState::Idle);
        assert!(animator.tick(0).is_none());
        assert!(animator.current_transition().is_none());
    }

    #[test]
    fn bounds_change_starts_a_transition() {
        let animator = ready_animator();
        assert_eq!(animator.state(), AnimatorState::Transitioning);
        assert!(animator.current_transition().is_some());
    }

    #[test]
    fn first_tick_contributes_no_elapsed_time() {
        let mut animator = ready_animator();
        let update = animator.tick(5_000).unwrap();
        assert_eq!(animator.elapsed_ms(), 0);
        let start = animator.current_transition().unwrap().start_rect();
        assert_eq!(update.crop, start);
    }

    #[test]
    fn elapsed_accumulates_between_ticks() {
        let mut animator = ready_animator();
        animator.tick(100);
        animator.tick(116);
        animator.tick(133);
        assert_eq!(animator.elapsed_ms(), 33);
    }

    #[test]
    fn generator_swap_replaces_the_transition() {
        let mut animator = ready_animator();
        let before = *animator.current_transition().unwrap();
        animator.set_generator(Box::new(RandomTransitionGenerator::seeded(77)));
        assert_eq!(animator.state(), AnimatorState::Transitioning);
        assert_ne!(*animator.current_transition().unwrap(), before);
        assert_eq!(animator.elapsed_ms(), 0);
    }

    #[test]
    fn frame_update_carries_redraw_hint() {
        let mut animator = ready_animator();
        let update = animator.tick(0).unwrap();
        assert_eq!(update.redraw_in_ms, FRAME_DELAY_MS);
    }
}
