pub mod animator;
pub mod easing;

pub use animator::{AnimationFrame, Animator};
pub use easing::EasingType;

/// Duration used by toggle, check and plus when the caller doesn't pick one.
pub const DEFAULT_DURATION_MS: u64 = 300;
