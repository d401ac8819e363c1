//! The navigation chrome: every controller wired to one page.
//!
//! ```text
//! scroll event ─► ScrollSampler ─┬─► ActiveSectionResolver ─► progress
//!                                └─► VisibilityController
//! nav click    ─► ScrollNavigator ─► ScrollHost::smooth_scroll_to
//! layer click  ─► LayerController ─► ScrollNavigator (layer offset)
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use waypoint_config::WaypointConfig;

use crate::animation::{EasingFunction, ScrollTiming};
use crate::error::Result;
use crate::layers::{Emphasis, LayerController, LayerSelection, layers_from_entries};
use crate::layout::{Layout, ScrollHost};
use crate::listeners::{EventKind, EventTarget, ListenerGuard, ListenerOptions, PageEvent};
use crate::navigator::{NavigateOutcome, OffsetPolicy, ScrollNavigator};
use crate::progress::{progress_percent, progress_ratio};
use crate::registry::SectionRegistry;
use crate::resolver::ActiveSectionResolver;
use crate::sampler::{ScrollSampler, ScrollState};
use crate::theme::{ThemeTable, to_hex};
use crate::visibility::{Presentation, Visibility, VisibilityController};

/// Thresholds and offsets, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeSettings {
    pub active_threshold: f32,
    pub hide_after: f32,
    pub breakpoint: f32,
    pub section_offsets: OffsetPolicy,
    pub layer_offsets: OffsetPolicy,
    pub timing: ScrollTiming,
    pub is_admin: bool,
}

impl ChromeSettings {
    pub fn from_config(config: &WaypointConfig) -> Self {
        let nav = &config.navigation;
        let easing = EasingFunction::parse(&nav.easing).unwrap_or_else(|| {
            tracing::warn!(easing = %nav.easing, "unknown easing, using ease_in_out");
            EasingFunction::default()
        });
        Self {
            active_threshold: config.scroll.active_threshold,
            hide_after: config.scroll.hide_after,
            breakpoint: nav.breakpoint,
            section_offsets: OffsetPolicy::responsive(
                nav.breakpoint,
                nav.section_offset_narrow,
                nav.section_offset_wide,
            ),
            layer_offsets: OffsetPolicy::fixed(nav.layer_offset),
            timing: ScrollTiming {
                duration_ms: nav.scroll_duration_ms.max(0.0),
                easing,
            },
            is_admin: config.access.is_admin,
        }
    }
}

impl Default for ChromeSettings {
    fn default() -> Self {
        Self::from_config(&WaypointConfig::default())
    }
}

type AdminCallback = Box<dyn FnMut()>;

pub struct NavChrome {
    registry: SectionRegistry,
    theme: ThemeTable,
    settings: ChromeSettings,
    sampler: ScrollSampler,
    resolver: ActiveSectionResolver,
    visibility: VisibilityController,
    navigator: ScrollNavigator,
    layers: LayerController,
    presentation: Presentation,
    admin_action: Option<AdminCallback>,
}

impl NavChrome {
    pub fn from_config(config: &WaypointConfig) -> Result<Self> {
        let registry = SectionRegistry::from_entries(&config.sections)?;
        let layers = layers_from_entries(&config.layers)?;
        let settings = ChromeSettings::from_config(config);
        Ok(Self::new(registry, LayerController::new(layers, settings.layer_offsets), settings))
    }

    pub fn new(registry: SectionRegistry, layers: LayerController, settings: ChromeSettings) -> Self {
        Self {
            registry,
            theme: ThemeTable::new(),
            sampler: ScrollSampler::new(),
            resolver: ActiveSectionResolver::new(settings.active_threshold),
            visibility: VisibilityController::new(settings.hide_after),
            navigator: ScrollNavigator::new(settings.section_offsets),
            layers,
            presentation: Presentation::Floating,
            admin_action: None,
            settings,
        }
    }

    /// Callback for the admin-only action. Ignored unless `is_admin`.
    pub fn with_admin_action(mut self, f: impl FnMut() + 'static) -> Self {
        self.admin_action = Some(Box::new(f));
        self
    }

    /// Register passive scroll and resize listeners on `target`.
    ///
    /// The presentation is taken from `layout`'s current width, since no
    /// resize event fires for the size the page mounts at. The returned
    /// [`Mount`] owns both registrations; drop it on teardown.
    pub fn mount(chrome: &Rc<RefCell<Self>>, target: &EventTarget, layout: &impl Layout) -> Mount {
        chrome.borrow_mut().on_resize(layout.viewport_width());
        let on_scroll = Rc::downgrade(chrome);
        let scroll = target.add_listener(EventKind::Scroll, ListenerOptions::PASSIVE, move |e| {
            if let (PageEvent::Scroll(layout), Some(chrome)) = (e, on_scroll.upgrade()) {
                chrome.borrow_mut().on_scroll(layout);
            }
        });
        let on_resize = Rc::downgrade(chrome);
        let resize = target.add_listener(EventKind::Resize, ListenerOptions::PASSIVE, move |e| {
            if let (PageEvent::Resize { viewport_width }, Some(chrome)) = (e, on_resize.upgrade()) {
                chrome.borrow_mut().on_resize(*viewport_width);
            }
        });
        log::debug!("navigation chrome mounted");
        Mount {
            _scroll: scroll,
            _resize: resize,
        }
    }

    /// Handle one scroll sample.
    pub fn on_scroll(&mut self, layout: &impl Layout) {
        let sample = *self.sampler.sample(layout.scroll_y());
        self.resolver.resolve(&self.registry, layout);
        self.visibility.observe(&sample);
        self.sync_nav_visible();
    }

    /// Only the presentation follows the width; offsets read it per request.
    pub fn on_resize(&mut self, viewport_width: f32) {
        self.presentation = Presentation::for_width(viewport_width, self.settings.breakpoint);
        self.sync_nav_visible();
    }

    // `nav_visible` mirrors what is rendered, not the raw hysteresis state.
    fn sync_nav_visible(&mut self) {
        let visible = self.visibility() == Visibility::Visible;
        self.sampler.set_nav_visible(visible);
    }

    /// Scroll to a section (or any element id). Unknown ids are a no-op.
    pub fn navigate_to(&mut self, id: &str, host: &mut impl ScrollHost) -> NavigateOutcome {
        self.navigator.navigate_to(id, host)
    }

    pub fn select_layer(
        &mut self,
        selection: impl Into<LayerSelection>,
        host: &mut impl ScrollHost,
    ) -> Option<NavigateOutcome> {
        self.layers.select_layer(selection.into(), host)
    }

    /// Run the admin action if the capability is granted.
    pub fn trigger_admin_action(&mut self) -> bool {
        if !self.settings.is_admin {
            return false;
        }
        match self.admin_action.as_mut() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &ChromeSettings {
        &self.settings
    }

    pub fn scroll_state(&self) -> &ScrollState {
        self.sampler.state()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.resolver.current()
    }

    pub fn active_layer(&self) -> LayerSelection {
        self.layers.active()
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.effective(self.presentation)
    }

    pub fn progress(&self) -> f32 {
        progress_ratio(&self.registry, self.active_section())
    }

    /// Render-ready snapshot of the whole chrome.
    pub fn view(&self) -> NavView {
        let active = self.active_section();
        let items = self
            .registry
            .iter()
            .map(|section| {
                let tokens = self.theme.get(section.visual_group);
                NavItemView {
                    id: section.id.clone(),
                    label: section.label.clone(),
                    short_label: section.short_label.clone(),
                    accent: to_hex(tokens.accent),
                    fill: to_hex(tokens.fill),
                    active: active == Some(section.id.as_str()),
                    emphasis: self.layers.emphasis(section),
                }
            })
            .collect();
        let layers = self
            .layers
            .layers()
            .iter()
            .map(|layer| LayerView {
                id: layer.id.as_str(),
                label: layer.label.clone(),
                description: layer.description.clone(),
                accent: to_hex(self.theme.get(layer.visual_group).accent),
                selected: self.layers.active() == LayerSelection::Layer(layer.id),
            })
            .collect();

        NavView {
            items,
            layers,
            active_section: active.map(str::to_string),
            active_layer: self.layers.active(),
            progress: progress_ratio(&self.registry, active),
            progress_percent: progress_percent(&self.registry, active),
            visibility: self.visibility(),
            presentation: self.presentation,
            admin_action: self.settings.is_admin,
        }
    }
}

/// Listener registrations for a mounted chrome.
#[must_use = "dropping the mount unregisters the chrome immediately"]
pub struct Mount {
    _scroll: ListenerGuard,
    _resize: ListenerGuard,
}

impl Mount {
    /// Unregister both listeners. Same as dropping.
    pub fn unmount(self) {
        log::debug!("navigation chrome unmounted");
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItemView {
    pub id: String,
    pub label: String,
    pub short_label: String,
    pub accent: String,
    pub fill: String,
    pub active: bool,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerView {
    pub id: &'static str,
    pub label: String,
    pub description: String,
    pub accent: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavView {
    pub items: Vec<NavItemView>,
    pub layers: Vec<LayerView>,
    pub active_section: Option<String>,
    pub active_layer: LayerSelection,
    pub progress: f32,
    pub progress_percent: u8,
    pub visibility: Visibility,
    pub presentation: Presentation,
    /// Whether the admin-only action is offered
    pub admin_action: bool,
}
