//! Geometry seam between the navigation engine and the page it runs on.
//!
//! The engine never owns the page. It reads element rectangles and the scroll
//! position through [`Layout`], and requests scrolling through
//! [`ScrollHost`]. Any id the host cannot locate is simply "not mounted yet".

use std::collections::HashMap;

/// An element's box relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    /// Distance of the top edge from the viewport top; negative once the
    /// element has scrolled past it
    pub top: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Zero, negative or non-finite heights carry no usable geometry.
    pub fn has_extent(&self) -> bool {
        self.height.is_finite() && self.height > 0.0 && self.top.is_finite()
    }
}

/// Read-only view of the page geometry.
pub trait Layout {
    /// Current vertical scroll offset, `None` when nothing is scrollable.
    fn scroll_y(&self) -> Option<f32>;

    fn viewport_width(&self) -> f32;

    /// Rectangle of the element with this id, if it is mounted.
    fn element_rect(&self, id: &str) -> Option<ElementRect>;
}

/// A page that can also be scrolled.
pub trait ScrollHost: Layout {
    /// Start a smooth scroll towards `target_y`. Fire-and-forget: callers do
    /// not wait for it and a later request retargets the animation.
    fn smooth_scroll_to(&mut self, target_y: f32);
}

/// A frozen copy of the page geometry, carried by scroll and resize events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    pub scroll_y: Option<f32>,
    pub viewport_width: f32,
    pub rects: HashMap<String, ElementRect>,
}

impl LayoutSnapshot {
    pub fn new(scroll_y: f32, viewport_width: f32) -> Self {
        Self {
            scroll_y: Some(scroll_y),
            viewport_width,
            rects: HashMap::new(),
        }
    }

    pub fn with_rect(mut self, id: impl Into<String>, top: f32, height: f32) -> Self {
        self.rects.insert(id.into(), ElementRect::new(top, height));
        self
    }
}

impl Layout for LayoutSnapshot {
    fn scroll_y(&self) -> Option<f32> {
        self.scroll_y
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn element_rect(&self, id: &str) -> Option<ElementRect> {
        self.rects.get(id).copied()
    }
}
