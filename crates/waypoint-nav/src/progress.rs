//! Linear reading-progress indicator.

use crate::registry::SectionRegistry;

/// Fill ratio for the progress bar: `(index + 1) / total`, in `[0, 1]`.
///
/// No active section, an unknown id or an empty registry all read as 0.
pub fn progress_ratio(registry: &SectionRegistry, active: Option<&str>) -> f32 {
    let total = registry.len();
    match active.and_then(|id| registry.index_of(id)) {
        Some(index) if total > 0 => ((index + 1) as f32 / total as f32).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Same ratio as a whole-number percentage, for bar widths.
pub fn progress_percent(registry: &SectionRegistry, active: Option<&str>) -> u8 {
    (progress_ratio(registry, active) * 100.0).round() as u8
}
