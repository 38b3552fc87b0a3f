#![forbid(unsafe_code)]

pub mod animator;
pub mod ease;
pub mod error;
pub mod generator;
pub mod geom;
pub mod transform;
pub mod transition;

pub use animator::{
    Animator, AnimatorState, FRAME_DELAY_MS, FrameUpdate, MILLIS_PER_SECOND, TARGET_FPS,
    TransitionObserver,
};
pub use ease::Ease;
pub use error::{KenBurnsError, KenBurnsResult};
pub use generator::{GeneratorConfig, RandomTransitionGenerator, TransitionGenerator};
pub use geom::{Affine, Point, Rect, RectExt, Vec2, lerp, lerp_rect};
pub use transform::{CropFit, compute_transform, fit_crop};
pub use transition::Transition;
