//! Waypoint configuration system
//!
//! This crate provides centralized configuration for the dashboard navigation
//! chrome, loading thresholds, offsets and the section/layer descriptors from
//! `waypoint.toml`, with environment variables taking precedence.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "waypoint.toml";

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaypointConfig {
    /// Scroll-spy and hide/show thresholds
    pub scroll: ScrollConfig,
    /// Scroll-to-section offsets and animation
    pub navigation: NavigationConfig,
    /// Capability flags supplied by the host application
    pub access: AccessConfig,
    /// Geometry of the simulated report page
    pub page: PageConfig,
    /// Ordered navigation items, top to bottom
    pub sections: Vec<SectionEntry>,
    /// The four thematic layers
    pub layers: Vec<LayerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// A section becomes active once its top edge is at or above this many
    /// pixels from the viewport top
    pub active_threshold: f32,
    /// Downward scrolling hides the floating bar only past this offset
    pub hide_after: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Viewport widths strictly below this use the narrow offsets
    pub breakpoint: f32,
    /// Header clearance for section jumps on narrow viewports
    pub section_offset_narrow: f32,
    /// Header clearance for section jumps on wide viewports
    pub section_offset_wide: f32,
    /// Fixed header clearance for layer jumps, any width
    pub layer_offset: f32,
    /// Smooth scroll duration in milliseconds
    pub scroll_duration_ms: f32,
    /// Timing curve name (linear, ease, ease_in, ease_out, ease_in_out)
    pub easing: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Enables the admin-only action in the navigation bar
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Height of the page header above the first section
    pub header_height: f32,
    /// Height used for sections that don't specify one
    pub section_height: f32,
    /// Height of the page footer below the last section
    pub footer_height: f32,
}

/// A navigable report section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub short_label: Option<String>,
    #[serde(default)]
    pub visual_group: Option<String>,
    /// Layer this section belongs to, if any
    #[serde(default)]
    pub layer: Option<String>,
    /// Rendered height on the simulated page
    #[serde(default)]
    pub height: Option<f32>,
}

/// One of the thematic layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub visual_group: Option<String>,
    /// Element id the layer pill scrolls to; defaults to the layer id
    #[serde(default)]
    pub target: Option<String>,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            navigation: NavigationConfig::default(),
            access: AccessConfig::default(),
            page: PageConfig::default(),
            sections: default_sections(),
            layers: default_layers(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            active_threshold: 150.0,
            hide_after: 100.0,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            breakpoint: 1024.0,
            section_offset_narrow: 20.0,
            section_offset_wide: 80.0,
            layer_offset: 100.0,
            scroll_duration_ms: 450.0,
            easing: "ease_in_out".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 900.0,
            header_height: 64.0,
            section_height: 720.0,
            footer_height: 240.0,
        }
    }
}

fn section(id: &str, label: &str, short: &str, group: &str, layer: Option<&str>) -> SectionEntry {
    SectionEntry {
        id: id.to_string(),
        label: label.to_string(),
        short_label: Some(short.to_string()),
        visual_group: Some(group.to_string()),
        layer: layer.map(str::to_string),
        height: None,
    }
}

fn layer(id: &str, label: &str, description: &str, group: &str, target: &str) -> LayerEntry {
    LayerEntry {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        visual_group: Some(group.to_string()),
        target: Some(target.to_string()),
    }
}

/// The six report sections of the daily pipeline dashboard.
pub fn default_sections() -> Vec<SectionEntry> {
    vec![
        section("target-progress", "ARR Target Progress", "Target", "blue", Some("pace")),
        section("pipeline-coverage", "Pipeline Coverage", "Coverage", "emerald", Some("gaps")),
        section("todays-changes", "Today's Changes", "Today", "amber", None),
        section("top-deals", "Top Q1 Deals", "Deals", "violet", Some("action")),
        section("deals-at-risk", "Deals at Risk", "Risk", "rose", Some("action")),
        section("owner-performance", "Owner Contribution", "Owners", "slate", Some("reps")),
    ]
}

/// The four thematic layers and the section each one jumps to.
pub fn default_layers() -> Vec<LayerEntry> {
    vec![
        layer("pace", "Pace", "Are we on track to hit target?", "blue", "target-progress"),
        layer("gaps", "Gaps", "Where is coverage thin?", "emerald", "pipeline-coverage"),
        layer("reps", "Reps", "Who is contributing?", "slate", "owner-performance"),
        layer("action", "Action", "What needs attention today?", "rose", "deals-at-risk"),
    ]
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|val| val == "1" || val.eq_ignore_ascii_case("true"))
}

fn env_f32(name: &str) -> Option<f32> {
    let val = std::env::var(name).ok()?;
    match val.parse::<f32>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            warn!(variable = name, value = %val, "ignoring non-numeric override");
            None
        }
    }
}

impl WaypointConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Load `waypoint.toml` from the current directory, or defaults if it is
    /// missing or unreadable
    pub fn load_or_default() -> Self {
        Self::load_from_path_or_default(CONFIG_FILE)
    }

    /// Like [`load_or_default`](Self::load_or_default) with an explicit path.
    pub fn load_from_path_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(error) => {
                warn!(%error, path = ?path.as_ref(), "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Some(v) = env_f32("WAYPOINT_ACTIVE_THRESHOLD") {
            self.scroll.active_threshold = v;
        }
        if let Some(v) = env_f32("WAYPOINT_HIDE_AFTER") {
            self.scroll.hide_after = v;
        }
        if let Some(v) = env_f32("WAYPOINT_BREAKPOINT") {
            self.navigation.breakpoint = v;
        }
        if let Some(v) = env_f32("WAYPOINT_SECTION_OFFSET_NARROW") {
            self.navigation.section_offset_narrow = v;
        }
        if let Some(v) = env_f32("WAYPOINT_SECTION_OFFSET_WIDE") {
            self.navigation.section_offset_wide = v;
        }
        if let Some(v) = env_f32("WAYPOINT_LAYER_OFFSET") {
            self.navigation.layer_offset = v;
        }
        if let Some(v) = env_f32("WAYPOINT_SCROLL_DURATION_MS") {
            self.navigation.scroll_duration_ms = v.max(0.0);
        }
        if let Ok(easing) = std::env::var("WAYPOINT_EASING") {
            self.navigation.easing = easing;
        }
        if let Some(flag) = env_flag("WAYPOINT_IS_ADMIN") {
            self.access.is_admin = flag;
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from waypoint.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WaypointConfig::default();
        assert_eq!(config.scroll.active_threshold, 150.0);
        assert_eq!(config.scroll.hide_after, 100.0);
        assert_eq!(config.navigation.breakpoint, 1024.0);
        assert_eq!(config.sections.len(), 6);
        assert_eq!(config.layers.len(), 4);
        assert!(!config.access.is_admin);
    }

    #[test]
    fn test_toml_roundtrip_keeps_sections() {
        let config = WaypointConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: WaypointConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.sections, config.sections);
        assert_eq!(parsed.layers, config.layers);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: WaypointConfig = toml::from_str(
            r#"
            [navigation]
            section_offset_wide = 96.0

            [[sections]]
            id = "summary"
            label = "Summary"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.navigation.section_offset_wide, 96.0);
        assert_eq!(parsed.navigation.section_offset_narrow, 20.0);
        assert_eq!(parsed.sections.len(), 1);
        assert_eq!(parsed.sections[0].short_label, None);
        assert_eq!(parsed.layers.len(), 4);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = WaypointConfig::load_from_path_or_default("definitely/not/here.toml");
        assert_eq!(config.sections.len(), 6);
    }

    #[test]
    fn test_load_from_file_reports_missing_path() {
        let err = WaypointConfig::load_from_file("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("WAYPOINT_LAYER_OFFSET", "120");
            std::env::set_var("WAYPOINT_IS_ADMIN", "true");
            std::env::set_var("WAYPOINT_BREAKPOINT", "wide");
        }

        let mut config = WaypointConfig::default();
        config.merge_with_env();

        assert_eq!(config.navigation.layer_offset, 120.0);
        assert!(config.access.is_admin);
        assert_eq!(config.navigation.breakpoint, 1024.0);

        unsafe {
            std::env::remove_var("WAYPOINT_LAYER_OFFSET");
            std::env::remove_var("WAYPOINT_IS_ADMIN");
            std::env::remove_var("WAYPOINT_BREAKPOINT");
        }
    }
}
