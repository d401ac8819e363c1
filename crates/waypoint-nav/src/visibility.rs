//! Hide-on-scroll state machine for the floating navigation bar.

use serde::Serialize;

use crate::sampler::{ScrollDirection, ScrollState};

/// Default dead zone below which the bar is never hidden.
pub const DEFAULT_HIDE_AFTER: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// How the navigation is presented at the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Desktop floating bar, subject to hide-on-scroll
    Floating,
    /// Narrow-viewport bottom bar, always shown
    Compact,
}

impl Presentation {
    pub fn for_width(viewport_width: f32, breakpoint: f32) -> Self {
        if viewport_width < breakpoint {
            Self::Compact
        } else {
            Self::Floating
        }
    }
}

/// Two-state machine: `Visible` ⇄ `Hidden`.
///
/// Hiding needs a downward sample past the dead zone; showing needs either an
/// upward sample or a sample inside the dead zone.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    state: Visibility,
    hide_after: f32,
}

impl VisibilityController {
    pub fn new(hide_after: f32) -> Self {
        Self {
            state: Visibility::Visible,
            hide_after,
        }
    }

    /// Guard for `Visible -> Hidden`.
    pub fn should_hide(&self, sample: &ScrollState) -> bool {
        sample.direction == ScrollDirection::Down && sample.position_y > self.hide_after
    }

    /// Guard for `Hidden -> Visible`.
    pub fn should_show(&self, sample: &ScrollState) -> bool {
        sample.direction == ScrollDirection::Up || sample.position_y <= self.hide_after
    }

    /// Apply one sample and return the resulting state.
    pub fn observe(&mut self, sample: &ScrollState) -> Visibility {
        let next = match self.state {
            Visibility::Visible if self.should_hide(sample) => Visibility::Hidden,
            Visibility::Hidden if self.should_show(sample) => Visibility::Visible,
            current => current,
        };
        if next != self.state {
            log::debug!("nav {:?} -> {:?} at y={}", self.state, next, sample.position_y);
            self.state = next;
        }
        self.state
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Visibility as rendered for a given presentation.
    pub fn effective(&self, presentation: Presentation) -> Visibility {
        match presentation {
            Presentation::Compact => Visibility::Visible,
            Presentation::Floating => self.state,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state == Visibility::Visible
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_AFTER)
    }
}
