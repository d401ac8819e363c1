//! Eased interpolation of a single scroll offset.
//!
//! A [`ScrollAnimation`] runs from the offset at request time to a target over
//! a fixed duration. There is no cancellation: a new request replaces the
//! running one and starts from wherever the previous one had got to.

use super::easing::EasingFunction;

/// Timing shared by every smooth scroll on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTiming {
    pub duration_ms: f32,
    pub easing: EasingFunction,
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self {
            duration_ms: 450.0,
            easing: EasingFunction::EaseInOut,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed_ms: f32,
    timing: ScrollTiming,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, timing: ScrollTiming) -> Self {
        Self {
            from,
            to,
            elapsed_ms: 0.0,
            timing,
        }
    }

    /// Start over towards `to` from the current interpolated position.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.position();
        self.to = to;
        self.elapsed_ms = 0.0;
    }

    /// Advance by `dt_ms` and return the new position.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.timing.duration_ms.max(0.0));
        }
        self.position()
    }

    pub fn progress(&self) -> f32 {
        if self.timing.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.timing.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn position(&self) -> f32 {
        let p = self.progress();
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.timing.easing.evaluate(p)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
