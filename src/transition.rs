use crate::{
    ease::Ease,
    error::{KenBurnsError, KenBurnsResult},
    geom::{Rect, RectExt as _, lerp_rect},
};

/// One pan/zoom segment: a crop rect drifting from `start` to `end` over a
/// fixed duration under an easing policy.
///
/// Immutable once built; the animator discards it on completion or when the
/// bounds it was generated against change.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    start: Rect,
    end: Rect,
    duration_ms: u64,
    ease: Ease,
}

impl Transition {
    pub fn new(start: Rect, end: Rect, duration_ms: u64, ease: Ease) -> KenBurnsResult<Self> {
        if start.is_degenerate() {
            return Err(KenBurnsError::invalid_transition(
                "start rect must have positive width and height",
            ));
        }
        if end.is_degenerate() {
            return Err(KenBurnsError::invalid_transition(
                "end rect must have positive width and height",
            ));
        }
        if duration_ms == 0 {
            return Err(KenBurnsError::invalid_transition("duration must be > 0 ms"));
        }
        Ok(Self {
            start,
            end,
            duration_ms,
            ease,
        })
    }

    /// Crop rect at `elapsed_ms` into the segment.
    ///
    /// Elapsed time past the duration clamps to the end rect, so the final
    /// frame of a finished transition is still well defined.
    pub fn rect_at(&self, elapsed_ms: u64) -> Rect {
        let t = elapsed_ms.min(self.duration_ms) as f64 / self.duration_ms as f64;
        lerp_rect(self.start, self.end, self.ease.apply(t))
    }

    pub fn start_rect(&self) -> Rect {
        self.start
    }

    pub fn end_rect(&self) -> Rect {
        self.end
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }
}
