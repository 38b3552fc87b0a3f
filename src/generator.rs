use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

use crate::{
    ease::Ease,
    error::{KenBurnsError, KenBurnsResult},
    geom::{Rect, RectExt as _},
    transition::Transition,
};

/// Strategy capability: produce the next pan/zoom segment for the given
/// bounds. Implementations may be stateful (the default one owns an RNG).
pub trait TransitionGenerator {
    fn generate_next_transition(
        &mut self,
        image_bounds: Rect,
        viewport_bounds: Rect,
    ) -> KenBurnsResult<Transition>;
}

/// Tuning policy for [`RandomTransitionGenerator`].
///
/// Crop factors are fractions of the largest viewport-aspect crop that fits
/// the image; 1.0 shows as much of the image as possible, smaller values zoom
/// in. Every field is independently overridable via struct update syntax.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct GeneratorConfig {
    pub min_crop_factor: f64,
    pub max_crop_factor: f64,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    pub ease: Ease,
    /// Fixed RNG seed; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_crop_factor: 0.6,
            max_crop_factor: 1.0,
            min_duration_ms: 8_000,
            max_duration_ms: 12_000,
            ease: Ease::InOutSine,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> KenBurnsResult<()> {
        if !(self.min_crop_factor.is_finite() && self.max_crop_factor.is_finite()) {
            return Err(KenBurnsError::validation("crop factors must be finite"));
        }
        if self.min_crop_factor <= 0.0 {
            return Err(KenBurnsError::validation("min_crop_factor must be > 0"));
        }
        if self.min_crop_factor > self.max_crop_factor {
            return Err(KenBurnsError::validation(
                "min_crop_factor must be <= max_crop_factor",
            ));
        }
        if self.max_crop_factor > 1.0 {
            return Err(KenBurnsError::validation("max_crop_factor must be <= 1"));
        }
        if self.min_duration_ms == 0 {
            return Err(KenBurnsError::validation("min_duration_ms must be > 0"));
        }
        if self.min_duration_ms > self.max_duration_ms {
            return Err(KenBurnsError::validation(
                "min_duration_ms must be <= max_duration_ms",
            ));
        }
        Ok(())
    }
}

/// Default strategy: uniformly random start and end crops of the viewport's
/// aspect ratio, both fully inside the image, with a uniformly random
/// duration.
///
/// Draw order is fixed (start factor, start x, start y, then the same for the
/// end crop, then duration), so a seeded generator replays bit-identically.
pub struct RandomTransitionGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

// Identical start/end crops make a static segment; redraw the end crop this
// many times before giving up and accepting the duplicate.
const MAX_REDRAWS: u32 = 8;

impl Default for RandomTransitionGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomTransitionGenerator {
    pub fn new(config: GeneratorConfig) -> KenBurnsResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Shorthand for a deterministic generator with default tuning.
    pub fn seeded(seed: u64) -> Self {
        Self {
            config: GeneratorConfig {
                seed: Some(seed),
                ..GeneratorConfig::default()
            },
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Largest crop of the given aspect that fits inside `image`.
    fn max_crop_size(image: Rect, aspect: f64) -> (f64, f64) {
        let width = image.width().min(image.height() * aspect);
        (width, width / aspect)
    }

    fn draw_crop(&mut self, image: Rect, max_w: f64, max_h: f64) -> Rect {
        let factor = self
            .rng
            .gen_range(self.config.min_crop_factor..=self.config.max_crop_factor);
        let w = max_w * factor;
        let h = max_h * factor;

        let x0 = image.x0 + self.rng.gen_range(0.0..=(image.width() - w).max(0.0));
        let y0 = image.y0 + self.rng.gen_range(0.0..=(image.height() - h).max(0.0));

        // Clamp the far edges so containment holds exactly in floating point.
        Rect::new(x0, y0, (x0 + w).min(image.x1), (y0 + h).min(image.y1))
    }
}

impl TransitionGenerator for RandomTransitionGenerator {
    #[tracing::instrument(skip(self))]
    fn generate_next_transition(
        &mut self,
        image_bounds: Rect,
        viewport_bounds: Rect,
    ) -> KenBurnsResult<Transition> {
        if image_bounds.is_degenerate() {
            return Err(KenBurnsError::no_bounds(
                "image bounds must have positive width and height",
            ));
        }
        if viewport_bounds.is_degenerate() {
            return Err(KenBurnsError::no_bounds(
                "viewport bounds must have positive width and height",
            ));
        }

        let (max_w, max_h) = Self::max_crop_size(image_bounds, viewport_bounds.aspect());

        let start = self.draw_crop(image_bounds, max_w, max_h);
        let mut end = self.draw_crop(image_bounds, max_w, max_h);
        for _ in 0..MAX_REDRAWS {
            if end != start {
                break;
            }
            end = self.draw_crop(image_bounds, max_w, max_h);
        }

        let duration_ms = self
            .rng
            .gen_range(self.config.min_duration_ms..=self.config.max_duration_ms);

        Transition::new(start, end, duration_ms, self.config.ease)
    }
}
