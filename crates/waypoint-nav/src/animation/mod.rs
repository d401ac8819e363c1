//! Smooth-scroll animation.
//!
//! ```text
//! ScrollHost::smooth_scroll_to(target)
//!   └── ScrollAnimation (from → to, eased by EasingFunction)
//!         └── tick(dt) on every frame until settled
//! ```

pub mod easing;
pub mod smooth_scroll;

pub use easing::EasingFunction;
pub use smooth_scroll::{ScrollAnimation, ScrollTiming};
