//! Scroll-spy: which section is the reader currently in.

use crate::layout::Layout;
use crate::registry::SectionRegistry;

/// Default proximity threshold, in layout pixels from the viewport top.
pub const DEFAULT_ACTIVE_THRESHOLD: f32 = 150.0;

/// Picks the active section from the current geometry.
///
/// Sections are scanned bottom-most first and the first one whose top edge is
/// at or above the threshold wins, so when several sections have scrolled
/// past the threshold the one furthest down the page is chosen. When none
/// qualifies the previous answer is kept.
#[derive(Debug, Clone)]
pub struct ActiveSectionResolver {
    threshold: f32,
    current: Option<String>,
}

impl ActiveSectionResolver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            current: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Re-evaluate against `layout` and return the active id.
    ///
    /// Returns `true` in the second slot when the active section changed.
    pub fn resolve(
        &mut self,
        registry: &SectionRegistry,
        layout: &impl Layout,
    ) -> (Option<&str>, bool) {
        let found = registry.iter().rev().find(|section| {
            layout
                .element_rect(&section.id)
                .is_some_and(|rect| rect.has_extent() && rect.top <= self.threshold)
        });

        let mut changed = false;
        if let Some(section) = found {
            if self.current.as_deref() != Some(section.id.as_str()) {
                log::debug!(
                    "active section {:?} -> {}",
                    self.current.as_deref(),
                    section.id
                );
                self.current = Some(section.id.clone());
                changed = true;
            }
        }

        (self.current.as_deref(), changed)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSnapshot;

    fn registry() -> SectionRegistry {
        SectionRegistry::from_ids([("a", "A"), ("b", "B"), ("c", "C")]).unwrap()
    }

    #[test]
    fn test_nothing_before_first_resolution() {
        let mut resolver = ActiveSectionResolver::default();
        let layout = LayoutSnapshot::new(0.0, 1280.0)
            .with_rect("a", 400.0, 600.0)
            .with_rect("b", 1000.0, 600.0);
        assert_eq!(resolver.resolve(&registry(), &layout), (None, false));
    }

    #[test]
    fn test_bottom_most_qualifier_wins() {
        let mut resolver = ActiveSectionResolver::default();
        let layout = LayoutSnapshot::new(900.0, 1280.0)
            .with_rect("a", -700.0, 600.0)
            .with_rect("b", -100.0, 600.0)
            .with_rect("c", 500.0, 600.0);
        assert_eq!(resolver.resolve(&registry(), &layout), (Some("b"), true));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut resolver = ActiveSectionResolver::default();
        let layout = LayoutSnapshot::new(0.0, 1280.0)
            .with_rect("a", -300.0, 400.0)
            .with_rect("b", 150.0, 400.0);
        assert_eq!(resolver.resolve(&registry(), &layout).0, Some("b"));

        let layout = LayoutSnapshot::new(0.0, 1280.0)
            .with_rect("a", -300.0, 400.0)
            .with_rect("b", 150.5, 400.0);
        assert_eq!(resolver.resolve(&registry(), &layout).0, Some("a"));
    }

    #[test]
    fn test_retains_previous_when_none_qualifies() {
        let mut resolver = ActiveSectionResolver::default();
        let down = LayoutSnapshot::new(600.0, 1280.0).with_rect("a", 0.0, 600.0);
        resolver.resolve(&registry(), &down);

        let top = LayoutSnapshot::new(0.0, 1280.0)
            .with_rect("a", 600.0, 600.0)
            .with_rect("b", 1200.0, 600.0);
        assert_eq!(resolver.resolve(&registry(), &top), (Some("a"), false));
    }

    #[test]
    fn test_missing_and_empty_sections_skipped() {
        let mut resolver = ActiveSectionResolver::default();
        let layout = LayoutSnapshot::new(0.0, 1280.0)
            .with_rect("a", -50.0, 300.0)
            .with_rect("b", 10.0, 0.0);
        // "c" is not mounted and "b" has no height.
        assert_eq!(resolver.resolve(&registry(), &layout).0, Some("a"));
    }
}
