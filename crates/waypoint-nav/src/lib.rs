//! Scroll-synchronized navigation state for a long report page.
//!
//! This crate provides:
//! - Scroll-spy: which section is active as the reader scrolls
//! - Hide-on-scroll for the floating navigation bar
//! - Scroll-to-section targets with width-dependent header clearance
//! - A four-layer selector that highlights its member sections
//! - A linear progress ratio derived from section order
//!
//! The engine talks to its page through the [`Layout`] and [`ScrollHost`]
//! traits; [`SimulatedPage`] implements both for headless use.

pub mod animation;
pub mod chrome;
pub mod error;
pub mod filters;
pub mod layers;
pub mod layout;
pub mod listeners;
pub mod navigator;
pub mod page;
pub mod progress;
pub mod registry;
pub mod resolver;
pub mod sampler;
pub mod theme;
pub mod visibility;

pub use chrome::{ChromeSettings, Mount, NavChrome, NavItemView, NavView};
pub use error::RegistryError;
pub use filters::{DealSizeFilter, FilterBar, FilterState, OwnerFilter};
pub use layers::{Emphasis, Layer, LayerController, LayerId, LayerSelection};
pub use layout::{ElementRect, Layout, LayoutSnapshot, ScrollHost};
pub use listeners::{EventKind, EventTarget, ListenerGuard, ListenerOptions, PageEvent};
pub use navigator::{NavigateOutcome, OffsetPolicy, ScrollNavigator};
pub use page::SimulatedPage;
pub use progress::{progress_percent, progress_ratio};
pub use registry::{Section, SectionRegistry};
pub use resolver::ActiveSectionResolver;
pub use sampler::{ScrollDirection, ScrollSampler, ScrollState};
pub use theme::{ThemeTable, VisualGroup};
pub use visibility::{Presentation, Visibility, VisibilityController};
