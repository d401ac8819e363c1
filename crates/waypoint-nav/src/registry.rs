//! The static, ordered list of navigable report sections.

use std::collections::HashSet;

use waypoint_config::SectionEntry;

use crate::error::{RegistryError, Result};
use crate::layers::LayerId;
use crate::theme::VisualGroup;

/// A navigable section of the report page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub short_label: String,
    pub visual_group: VisualGroup,
    /// Layer the section belongs to, used for highlighting
    pub layer: Option<LayerId>,
    /// Position in the registry, 0-based and dense
    pub order: usize,
}

/// Sections in top-to-bottom page order.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry from `(id, label)` pairs, with neutral styling.
    pub fn from_ids<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let entries = items
            .into_iter()
            .map(|(id, label)| SectionEntry {
                id: id.to_string(),
                label: label.to_string(),
                short_label: None,
                visual_group: None,
                layer: None,
                height: None,
            })
            .collect::<Vec<_>>();
        Self::from_entries(&entries)
    }

    /// Validate configured entries and assign their order.
    ///
    /// Unknown visual groups fall back to the default group and unknown layer
    /// names leave the section without a layer; both are logged.
    pub fn from_entries(entries: &[SectionEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        let mut sections = Vec::with_capacity(entries.len());
        for (order, entry) in entries.iter().enumerate() {
            let id = entry.id.trim();
            if id.is_empty() {
                return Err(RegistryError::BlankId(order));
            }
            if !seen.insert(id.to_string()) {
                return Err(RegistryError::DuplicateSection(id.to_string()));
            }

            let visual_group = match entry.visual_group.as_deref() {
                None => VisualGroup::default(),
                Some(name) => VisualGroup::parse(name).unwrap_or_else(|| {
                    tracing::warn!(section = id, group = name, "unknown visual group");
                    VisualGroup::default()
                }),
            };
            let layer = entry.layer.as_deref().and_then(|name| {
                let parsed = LayerId::parse(name);
                if parsed.is_none() {
                    tracing::warn!(section = id, layer = name, "unknown layer membership");
                }
                parsed
            });

            sections.push(Section {
                id: id.to_string(),
                label: entry.label.clone(),
                short_label: entry
                    .short_label
                    .clone()
                    .unwrap_or_else(|| entry.label.clone()),
                visual_group,
                layer,
                order,
            });
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Registry position of `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.get(id).map(|s| s.order)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Section> {
        self.sections.iter()
    }
}
