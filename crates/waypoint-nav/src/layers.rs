//! Layer selector: four thematic lenses over the report.
//!
//! Selecting a layer scrolls to its target section and highlights the
//! sections that belong to it; every other section is dimmed. The
//! highlighting is a projection over the registry and never changes it.

use std::fmt;

use serde::Serialize;
use waypoint_config::LayerEntry;

use crate::error::{RegistryError, Result};
use crate::layout::ScrollHost;
use crate::navigator::{NavigateOutcome, OffsetPolicy, ScrollNavigator};
use crate::registry::{Section, SectionRegistry};
use crate::theme::VisualGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerId {
    Pace,
    Gaps,
    Reps,
    Action,
}

impl LayerId {
    pub const ALL: [LayerId; 4] = [LayerId::Pace, LayerId::Gaps, LayerId::Reps, LayerId::Action];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pace" => Some(Self::Pace),
            "gaps" => Some(Self::Gaps),
            "reps" => Some(Self::Reps),
            "action" => Some(Self::Action),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pace => "pace",
            Self::Gaps => "gaps",
            Self::Reps => "reps",
            Self::Action => "action",
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The layer filter: one layer, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSelection {
    #[default]
    All,
    Layer(LayerId),
}

impl LayerSelection {
    /// Unknown names resolve to [`LayerSelection::All`].
    pub fn parse(name: &str) -> Self {
        LayerId::parse(name).map_or(Self::All, Self::Layer)
    }
}

impl From<LayerId> for LayerSelection {
    fn from(id: LayerId) -> Self {
        Self::Layer(id)
    }
}

/// Highlight state of a section under the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Highlighted,
    Dimmed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub label: String,
    pub description: String,
    pub visual_group: VisualGroup,
    /// Element id the pill scrolls to
    pub target: String,
}

impl Layer {
    /// Whether `section` belongs to this layer, either by id alias or by
    /// declared membership.
    pub fn covers(&self, section: &Section) -> bool {
        section.id == self.id.as_str() || section.layer == Some(self.id)
    }
}

/// Validate the four layer descriptors.
pub fn layers_from_entries(entries: &[LayerEntry]) -> Result<Vec<Layer>> {
    let mut layers: Vec<Layer> = Vec::with_capacity(LayerId::ALL.len());
    for entry in entries {
        let id = LayerId::parse(&entry.id)
            .ok_or_else(|| RegistryError::UnknownLayer(entry.id.clone()))?;
        if layers.iter().any(|l| l.id == id) {
            return Err(RegistryError::DuplicateLayer(entry.id.clone()));
        }
        layers.push(Layer {
            id,
            label: entry.label.clone(),
            description: entry.description.clone(),
            visual_group: entry
                .visual_group
                .as_deref()
                .and_then(VisualGroup::parse)
                .unwrap_or_default(),
            target: entry
                .target
                .clone()
                .unwrap_or_else(|| id.as_str().to_string()),
        });
    }
    if let Some(missing) = LayerId::ALL
        .iter()
        .find(|id| !layers.iter().any(|l| l.id == **id))
    {
        return Err(RegistryError::MissingLayer(missing.to_string()));
    }
    layers.sort_by_key(|l| LayerId::ALL.iter().position(|id| *id == l.id));
    Ok(layers)
}

#[derive(Debug, Clone)]
pub struct LayerController {
    layers: Vec<Layer>,
    active: LayerSelection,
    navigator: ScrollNavigator,
}

impl LayerController {
    pub fn new(layers: Vec<Layer>, policy: OffsetPolicy) -> Self {
        Self {
            layers,
            active: LayerSelection::All,
            navigator: ScrollNavigator::new(policy),
        }
    }

    pub fn active(&self) -> LayerSelection {
        self.active
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Make `selection` active and, for a concrete layer, jump to its target.
    ///
    /// Returns `None` for [`LayerSelection::All`], which does not scroll.
    pub fn select_layer(
        &mut self,
        selection: LayerSelection,
        host: &mut impl ScrollHost,
    ) -> Option<NavigateOutcome> {
        log::debug!("layer {:?} -> {:?}", self.active, selection);
        self.active = selection;
        match selection {
            LayerSelection::All => None,
            LayerSelection::Layer(id) => {
                let target = self.layer(id)?.target.clone();
                Some(self.navigator.navigate_to(&target, host))
            }
        }
    }

    pub fn emphasis(&self, section: &Section) -> Emphasis {
        let covered = match self.active {
            LayerSelection::All => true,
            LayerSelection::Layer(id) => self
                .layer(id)
                .map_or(section.id == id.as_str() || section.layer == Some(id), |l| {
                    l.covers(section)
                }),
        };
        if covered {
            Emphasis::Highlighted
        } else {
            Emphasis::Dimmed
        }
    }

    /// Ids of every highlighted section, in registry order.
    pub fn highlighted<'a>(&self, registry: &'a SectionRegistry) -> Vec<&'a str> {
        registry
            .iter()
            .filter(|s| self.emphasis(s) == Emphasis::Highlighted)
            .map(|s| s.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSnapshot;

    struct NoScroll(LayoutSnapshot, Vec<f32>);

    impl crate::layout::Layout for NoScroll {
        fn scroll_y(&self) -> Option<f32> {
            self.0.scroll_y
        }
        fn viewport_width(&self) -> f32 {
            self.0.viewport_width
        }
        fn element_rect(&self, id: &str) -> Option<crate::layout::ElementRect> {
            self.0.rects.get(id).copied()
        }
    }

    impl ScrollHost for NoScroll {
        fn smooth_scroll_to(&mut self, target_y: f32) {
            self.1.push(target_y);
        }
    }

    fn controller() -> LayerController {
        let layers = layers_from_entries(&waypoint_config::default_layers()).unwrap();
        LayerController::new(layers, OffsetPolicy::fixed(100.0))
    }

    fn registry() -> SectionRegistry {
        SectionRegistry::from_entries(&waypoint_config::default_sections()).unwrap()
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(LayerSelection::parse("GAPS"), LayerSelection::Layer(LayerId::Gaps));
        assert_eq!(LayerSelection::parse("all"), LayerSelection::All);
        assert_eq!(LayerSelection::parse("???"), LayerSelection::All);
    }

    #[test]
    fn test_initial_selection_highlights_everything() {
        let ctl = controller();
        assert_eq!(ctl.active(), LayerSelection::All);
        assert_eq!(ctl.highlighted(&registry()).len(), 6);
    }

    #[test]
    fn test_select_layer_highlights_members_and_scrolls() {
        let mut ctl = controller();
        let mut host = NoScroll(
            LayoutSnapshot::new(200.0, 1280.0).with_rect("deals-at-risk", 900.0, 500.0),
            Vec::new(),
        );

        let outcome = ctl.select_layer(LayerId::Action.into(), &mut host);
        assert_eq!(outcome, Some(NavigateOutcome::Scrolling { target_y: 1000.0 }));
        assert_eq!(host.1, vec![1000.0]);
        assert_eq!(ctl.highlighted(&registry()), vec!["top-deals", "deals-at-risk"]);
    }

    #[test]
    fn test_select_all_does_not_scroll() {
        let mut ctl = controller();
        let mut host = NoScroll(LayoutSnapshot::new(0.0, 1280.0), Vec::new());
        ctl.select_layer(LayerId::Reps.into(), &mut host);
        assert_eq!(ctl.highlighted(&registry()), vec!["owner-performance"]);

        assert_eq!(ctl.select_layer(LayerSelection::All, &mut host), None);
        assert_eq!(ctl.highlighted(&registry()).len(), 6);
        assert!(host.1.is_empty());
    }

    #[test]
    fn test_section_id_alias_counts_as_member() {
        let registry = SectionRegistry::from_ids([("pace", "Pace"), ("other", "Other")]).unwrap();
        let mut ctl = controller();
        let mut host = NoScroll(LayoutSnapshot::new(0.0, 1280.0), Vec::new());
        ctl.select_layer(LayerId::Pace.into(), &mut host);
        assert_eq!(ctl.highlighted(&registry), vec!["pace"]);
    }

    #[test]
    fn test_layer_validation() {
        let mut entries = waypoint_config::default_layers();
        entries.pop();
        assert_eq!(
            layers_from_entries(&entries).unwrap_err(),
            RegistryError::MissingLayer("action".into())
        );

        let mut entries = waypoint_config::default_layers();
        entries[0].id = "tempo".into();
        assert_eq!(
            layers_from_entries(&entries).unwrap_err(),
            RegistryError::UnknownLayer("tempo".into())
        );
    }
}
