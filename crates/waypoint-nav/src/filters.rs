//! Filter bar state: deal owner and deal size.
//!
//! The navigation engine never reads this. It lives in the same chrome and
//! is handed its data by the host; this module only types it, parses user
//! input leniently and forwards changes to the host's callbacks.

use std::fmt;

use serde::Serialize;

/// Deal-size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DealSizeFilter {
    #[default]
    All,
    Enterprise,
    Standard,
}

impl DealSizeFilter {
    /// Unknown values read as `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "enterprise" => Self::Enterprise,
            "standard" => Self::Standard,
            _ => Self::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Enterprise => "enterprise",
            Self::Standard => "standard",
        }
    }
}

/// Owner selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerFilter {
    #[default]
    All,
    Owner(String),
}

impl OwnerFilter {
    /// `"all"`, blank input and names outside `owners` read as `All`.
    pub fn parse(value: &str, owners: &[String]) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        owners
            .iter()
            .find(|o| o.as_str() == value)
            .map_or(Self::All, |o| Self::Owner(o.clone()))
    }
}

impl fmt::Display for OwnerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Owner(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub selected_owner: OwnerFilter,
    pub deal_size: DealSizeFilter,
}

impl FilterState {
    pub fn is_filtered(&self) -> bool {
        self.selected_owner != OwnerFilter::All || self.deal_size != DealSizeFilter::All
    }
}

type OwnerCallback = Box<dyn FnMut(&OwnerFilter)>;
type DealSizeCallback = Box<dyn FnMut(DealSizeFilter)>;

/// Display model for the filter bar.
#[derive(Default)]
pub struct FilterBar {
    owners: Vec<String>,
    state: FilterState,
    total_count: usize,
    filtered_count: usize,
    on_owner_change: Option<OwnerCallback>,
    on_deal_size_change: Option<DealSizeCallback>,
}

impl FilterBar {
    pub fn new(owners: Vec<String>) -> Self {
        Self {
            owners,
            ..Self::default()
        }
    }

    pub fn on_owner_change(mut self, f: impl FnMut(&OwnerFilter) + 'static) -> Self {
        self.on_owner_change = Some(Box::new(f));
        self
    }

    pub fn on_deal_size_change(mut self, f: impl FnMut(DealSizeFilter) + 'static) -> Self {
        self.on_deal_size_change = Some(Box::new(f));
        self
    }

    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Accept a new state pushed by the host.
    pub fn set_state(&mut self, state: FilterState) {
        self.state = state;
    }

    pub fn set_counts(&mut self, total: usize, filtered: usize) {
        self.total_count = total;
        self.filtered_count = filtered.min(total);
    }

    pub fn select_owner(&mut self, value: &str) -> &OwnerFilter {
        let owner = OwnerFilter::parse(value, &self.owners);
        if owner != self.state.selected_owner {
            self.state.selected_owner = owner;
            if let Some(cb) = self.on_owner_change.as_mut() {
                cb(&self.state.selected_owner);
            }
        }
        &self.state.selected_owner
    }

    pub fn select_deal_size(&mut self, value: &str) -> DealSizeFilter {
        let size = DealSizeFilter::parse(value);
        if size != self.state.deal_size {
            self.state.deal_size = size;
            if let Some(cb) = self.on_deal_size_change.as_mut() {
                cb(size);
            }
        }
        size
    }

    pub fn summary(&self) -> String {
        if self.state.is_filtered() {
            format!("Showing {} of {} deals", self.filtered_count, self.total_count)
        } else {
            format!("Showing all {} deals", self.total_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn owners() -> Vec<String> {
        vec!["Dana".to_string(), "Lee".to_string()]
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(DealSizeFilter::parse("Enterprise"), DealSizeFilter::Enterprise);
        assert_eq!(DealSizeFilter::parse("mid-market"), DealSizeFilter::All);
        assert_eq!(OwnerFilter::parse("Lee", &owners()), OwnerFilter::Owner("Lee".into()));
        assert_eq!(OwnerFilter::parse("Someone", &owners()), OwnerFilter::All);
        assert_eq!(OwnerFilter::parse(" ALL ", &owners()), OwnerFilter::All);
    }

    #[test]
    fn test_callbacks_fire_on_change_only() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut bar = FilterBar::new(owners())
            .on_owner_change(move |o| sink.borrow_mut().push(o.to_string()));

        bar.select_owner("Dana");
        bar.select_owner("Dana");
        bar.select_owner("nobody");
        assert_eq!(*calls.borrow(), vec!["Dana".to_string(), "all".to_string()]);
    }

    #[test]
    fn test_summary() {
        let mut bar = FilterBar::new(owners());
        bar.set_counts(40, 12);
        assert_eq!(bar.summary(), "Showing all 40 deals");
        bar.select_deal_size("standard");
        assert_eq!(bar.summary(), "Showing 12 of 40 deals");
    }
}
