//! Scroll position sampling.
//!
//! [`ScrollSampler`] is the single owner of [`ScrollState`]. Every other
//! controller reads the state it exposes; none of them keeps its own copy of
//! the last scroll position.

use serde::Serialize;

/// Direction of the most recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
    /// No movement observed yet
    #[default]
    None,
}

/// Scroll position and direction as of the last sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollState {
    pub position_y: f32,
    pub last_position_y: f32,
    pub direction: ScrollDirection,
    /// Visibility of the floating bar, written back by the chrome after the
    /// visibility controller has seen this sample
    pub nav_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSampler {
    state: ScrollState,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self {
            state: ScrollState {
                nav_visible: true,
                ..ScrollState::default()
            },
        }
    }

    /// Record a new scroll offset. `None` (no scrollable viewport), negative
    /// and non-finite readings count as offset 0.
    ///
    /// An unchanged offset keeps the previous direction.
    pub fn sample(&mut self, reading: Option<f32>) -> &ScrollState {
        let position_y = match reading {
            Some(y) if y.is_finite() => y.max(0.0),
            _ => 0.0,
        };

        let previous = self.state.position_y;
        if position_y > previous {
            self.state.direction = ScrollDirection::Down;
        } else if position_y < previous {
            self.state.direction = ScrollDirection::Up;
        }

        self.state.last_position_y = previous;
        self.state.position_y = position_y;
        log::trace!(
            "scroll sample y={} last={} dir={:?}",
            position_y,
            previous,
            self.state.direction
        );
        &self.state
    }

    pub fn set_nav_visible(&mut self, visible: bool) {
        self.state.nav_visible = visible;
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn position_y(&self) -> f32 {
        self.state.position_y
    }

    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let sampler = ScrollSampler::new();
        assert_eq!(sampler.direction(), ScrollDirection::None);
        assert_eq!(sampler.position_y(), 0.0);
        assert!(sampler.state().nav_visible);
    }

    #[test]
    fn test_direction_tracking() {
        let mut sampler = ScrollSampler::new();
        assert_eq!(sampler.sample(Some(50.0)).direction, ScrollDirection::Down);
        assert_eq!(sampler.sample(Some(20.0)).direction, ScrollDirection::Up);

        let state = sampler.sample(Some(80.0));
        assert_eq!(state.direction, ScrollDirection::Down);
        assert_eq!(state.last_position_y, 20.0);
        assert_eq!(state.position_y, 80.0);
    }

    #[test]
    fn test_tie_continues_previous_direction() {
        let mut sampler = ScrollSampler::new();
        sampler.sample(Some(300.0));
        assert_eq!(sampler.sample(Some(300.0)).direction, ScrollDirection::Down);
        sampler.sample(Some(100.0));
        assert_eq!(sampler.sample(Some(100.0)).direction, ScrollDirection::Up);
    }

    #[test]
    fn test_missing_viewport_reads_zero() {
        let mut sampler = ScrollSampler::new();
        sampler.sample(Some(400.0));
        let state = sampler.sample(None);
        assert_eq!(state.position_y, 0.0);
        assert_eq!(state.direction, ScrollDirection::Up);
        assert_eq!(sampler.sample(Some(-30.0)).position_y, 0.0);
        assert_eq!(sampler.sample(Some(f32::NAN)).position_y, 0.0);
    }
}
