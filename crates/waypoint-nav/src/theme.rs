//! Colour tokens per visual group.
//!
//! Each navigation item and layer pill carries a [`VisualGroup`]. The tokens
//! for every group are resolved once into a [`ThemeTable`] when the registry
//! is built, so rendering is a table lookup rather than a per-item match.

use palette::{FromColor, LinSrgba, Srgba};
use serde::{Deserialize, Serialize};

/// Closed set of accent groups used by the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualGroup {
    Blue,
    Emerald,
    Amber,
    Violet,
    Rose,
    Slate,
}

impl VisualGroup {
    pub const ALL: [VisualGroup; 6] = [
        VisualGroup::Blue,
        VisualGroup::Emerald,
        VisualGroup::Amber,
        VisualGroup::Violet,
        VisualGroup::Rose,
        VisualGroup::Slate,
    ];

    /// Parse a configured group name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(Self::Blue),
            "emerald" | "green" => Some(Self::Emerald),
            "amber" | "yellow" => Some(Self::Amber),
            "violet" | "purple" => Some(Self::Violet),
            "rose" | "red" => Some(Self::Rose),
            "slate" | "gray" | "grey" => Some(Self::Slate),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl Default for VisualGroup {
    fn default() -> Self {
        Self::Slate
    }
}

/// Resolved colours for one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTokens {
    /// Text and icon colour of the active item
    pub accent: Srgba<u8>,
    /// Pill background of the active item
    pub fill: Srgba<u8>,
}

impl GroupTokens {
    fn new(accent: [u8; 3], fill_alpha: f32) -> Self {
        let accent = Srgba::new(accent[0], accent[1], accent[2], 255);
        Self {
            accent,
            fill: fade(accent, fill_alpha),
        }
    }
}

/// Blend alpha in linear space and come back to 8-bit sRGB.
fn fade(color: Srgba<u8>, alpha: f32) -> Srgba<u8> {
    let s: Srgba = color.into_format();
    let mut lin = LinSrgba::from_color(s);
    lin.alpha = alpha.clamp(0.0, 1.0);
    Srgba::from_color(lin).into_format()
}

/// Lookup table keyed by [`VisualGroup`].
#[derive(Debug, Clone)]
pub struct ThemeTable {
    tokens: [GroupTokens; 6],
}

impl ThemeTable {
    pub fn new() -> Self {
        let tokens = VisualGroup::ALL.map(|group| match group {
            VisualGroup::Blue => GroupTokens::new([59, 130, 246], 0.15),
            VisualGroup::Emerald => GroupTokens::new([16, 185, 129], 0.15),
            VisualGroup::Amber => GroupTokens::new([245, 158, 11], 0.18),
            VisualGroup::Violet => GroupTokens::new([139, 92, 246], 0.15),
            VisualGroup::Rose => GroupTokens::new([244, 63, 94], 0.15),
            VisualGroup::Slate => GroupTokens::new([100, 116, 139], 0.2),
        });
        Self { tokens }
    }

    pub fn get(&self, group: VisualGroup) -> &GroupTokens {
        &self.tokens[group.index()]
    }
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// `#rrggbb` (or `#rrggbbaa` when translucent) for view snapshots.
pub fn to_hex(color: Srgba<u8>) -> String {
    if color.alpha == 255 {
        format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.red, color.green, color.blue, color.alpha
        )
    }
}
