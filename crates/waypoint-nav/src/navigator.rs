//! Scroll-to-section with header clearance.

use crate::layout::ScrollHost;

/// Viewport width below which the narrow offset applies.
pub const DEFAULT_BREAKPOINT: f32 = 1024.0;

/// Header clearance for a navigation surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetPolicy {
    pub breakpoint: f32,
    pub narrow: f32,
    pub wide: f32,
}

impl OffsetPolicy {
    pub fn responsive(breakpoint: f32, narrow: f32, wide: f32) -> Self {
        Self {
            breakpoint,
            narrow,
            wide,
        }
    }

    /// Same clearance at every width.
    pub fn fixed(offset: f32) -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            narrow: offset,
            wide: offset,
        }
    }

    pub fn offset_for(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.breakpoint {
            self.narrow
        } else {
            self.wide
        }
    }
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigateOutcome {
    /// A smooth scroll towards `target_y` was requested.
    Scrolling { target_y: f32 },
    /// The element isn't mounted; nothing happened.
    NotFound,
}

impl NavigateOutcome {
    pub fn target_y(&self) -> Option<f32> {
        match self {
            Self::Scrolling { target_y } => Some(*target_y),
            Self::NotFound => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollNavigator {
    policy: OffsetPolicy,
}

impl ScrollNavigator {
    pub fn new(policy: OffsetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &OffsetPolicy {
        &self.policy
    }

    /// Where the page would have to scroll to bring `id` under the header,
    /// using the viewport width as it is right now.
    pub fn target_for(&self, id: &str, host: &impl ScrollHost) -> Option<f32> {
        let rect = host.element_rect(id)?;
        let scroll_y = host.scroll_y().unwrap_or(0.0);
        let offset = self.policy.offset_for(host.viewport_width());
        Some((rect.top + scroll_y - offset).max(0.0))
    }

    /// Smooth-scroll to the element with `id`. Unknown ids are a no-op.
    pub fn navigate_to(&self, id: &str, host: &mut impl ScrollHost) -> NavigateOutcome {
        match self.target_for(id, host) {
            Some(target_y) => {
                log::info!("Navigation requested: {} -> y={}", id, target_y);
                host.smooth_scroll_to(target_y);
                NavigateOutcome::Scrolling { target_y }
            }
            None => {
                log::debug!("Navigation skipped: {} is not mounted", id);
                NavigateOutcome::NotFound
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ElementRect, Layout};

    /// Records scroll requests instead of animating.
    struct Recorder {
        scroll_y: f32,
        width: f32,
        requests: Vec<f32>,
    }

    impl Layout for Recorder {
        fn scroll_y(&self) -> Option<f32> {
            Some(self.scroll_y)
        }
        fn viewport_width(&self) -> f32 {
            self.width
        }
        fn element_rect(&self, id: &str) -> Option<ElementRect> {
            (id == "coverage").then(|| ElementRect::new(400.0, 700.0))
        }
    }

    impl ScrollHost for Recorder {
        fn smooth_scroll_to(&mut self, target_y: f32) {
            self.requests.push(target_y);
        }
    }

    fn host(width: f32) -> Recorder {
        Recorder {
            scroll_y: 1000.0,
            width,
            requests: Vec::new(),
        }
    }

    #[test]
    fn test_offsets_differ_by_breakpoint() {
        let nav = ScrollNavigator::new(OffsetPolicy::responsive(1024.0, 20.0, 80.0));
        let mut narrow = host(800.0);
        let mut wide = host(1280.0);

        let a = nav.navigate_to("coverage", &mut narrow).target_y().unwrap();
        let b = nav.navigate_to("coverage", &mut wide).target_y().unwrap();

        assert_eq!(a, 1380.0);
        assert_eq!(b, 1320.0);
        assert_eq!(a - b, 60.0);
        assert_eq!(narrow.requests, vec![1380.0]);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let nav = ScrollNavigator::new(OffsetPolicy::fixed(100.0));
        let mut page = host(1280.0);
        assert_eq!(nav.navigate_to("nowhere", &mut page), NavigateOutcome::NotFound);
        assert!(page.requests.is_empty());
    }

    #[test]
    fn test_target_never_negative() {
        let nav = ScrollNavigator::new(OffsetPolicy::fixed(100.0));
        let mut page = host(1280.0);
        page.scroll_y = 0.0;
        page.width = 500.0;
        // rect top 400 at scroll 0 → 300
        assert_eq!(nav.target_for("coverage", &page), Some(300.0));

        let nav = ScrollNavigator::new(OffsetPolicy::fixed(900.0));
        assert_eq!(nav.target_for("coverage", &page), Some(0.0));
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let policy = OffsetPolicy::responsive(1024.0, 20.0, 80.0);
        assert_eq!(policy.offset_for(1023.9), 20.0);
        assert_eq!(policy.offset_for(1024.0), 80.0);
    }
}
