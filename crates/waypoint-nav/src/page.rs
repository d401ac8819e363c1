//! In-memory report page: a stack of sections inside a scrollable viewport.
//!
//! Stands in for the browser document when driving the chrome headless: it
//! reports element rectangles, runs smooth scrolls on a frame clock and emits
//! scroll/resize events through its [`EventTarget`].

use waypoint_config::{PageConfig, SectionEntry};

use crate::animation::{ScrollAnimation, ScrollTiming};
use crate::layout::{ElementRect, Layout, LayoutSnapshot, ScrollHost};
use crate::listeners::{EventTarget, PageEvent};

/// A block on the page, positioned in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBlock {
    pub id: String,
    pub doc_top: f32,
    pub height: f32,
}

/// Viewport state
#[derive(Debug, Clone)]
pub struct Viewport {
    pub scroll_offset_y: f32,
    pub width: f32,
    pub height: f32,
    pub content_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_offset_y: 0.0,
            width,
            height,
            content_height: 0.0,
        }
    }

    pub fn max_scroll_y(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Clamp an offset into the scrollable range.
    pub fn clamp(&self, y: f32) -> f32 {
        if y.is_finite() {
            y.clamp(0.0, self.max_scroll_y())
        } else {
            0.0
        }
    }

    /// Scroll by delta (positive = down); returns whether the offset moved.
    pub fn scroll(&mut self, delta_y: f32) -> bool {
        self.scroll_to(self.scroll_offset_y + delta_y)
    }

    pub fn scroll_to(&mut self, y: f32) -> bool {
        let next = self.clamp(y);
        let moved = next != self.scroll_offset_y;
        self.scroll_offset_y = next;
        moved
    }

    /// Set content height and pull the offset back into range if needed
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height.max(0.0);
        self.scroll_offset_y = self.clamp(self.scroll_offset_y);
    }
}

pub struct SimulatedPage {
    viewport: Viewport,
    blocks: Vec<PageBlock>,
    timing: ScrollTiming,
    animation: Option<ScrollAnimation>,
    events: EventTarget,
}

impl SimulatedPage {
    /// Lay sections out top to bottom below the page header.
    pub fn from_config(page: &PageConfig, sections: &[SectionEntry], timing: ScrollTiming) -> Self {
        let mut builder = Self::builder(page.viewport_width, page.viewport_height, timing)
            .header(page.header_height);
        for entry in sections {
            builder = builder.section(&entry.id, entry.height.unwrap_or(page.section_height));
        }
        builder.footer(page.footer_height).build()
    }

    pub fn builder(width: f32, height: f32, timing: ScrollTiming) -> PageBuilder {
        PageBuilder {
            viewport: Viewport::new(width, height),
            cursor: 0.0,
            blocks: Vec::new(),
            timing,
        }
    }

    pub fn events(&self) -> &EventTarget {
        &self.events
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    /// Mount or unmount a block, e.g. to model content that loads late.
    pub fn remove_block(&mut self, id: &str) -> Option<PageBlock> {
        let idx = self.blocks.iter().position(|b| b.id == id)?;
        Some(self.blocks.remove(idx))
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Instant scroll by a wheel/touch delta.
    pub fn scroll_by(&mut self, delta_y: f32) {
        self.animation = None;
        if self.viewport.scroll(delta_y) {
            self.emit_scroll();
        }
    }

    /// Instant jump to an absolute offset.
    pub fn scroll_to(&mut self, y: f32) {
        self.animation = None;
        if self.viewport.scroll_to(y) {
            self.emit_scroll();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width.max(0.0);
        self.viewport.height = height.max(0.0);
        let content = self.viewport.content_height;
        self.viewport.set_content_height(content);
        self.events.dispatch(&PageEvent::Resize {
            viewport_width: self.viewport.width,
        });
    }

    /// Advance a running smooth scroll by one frame.
    pub fn tick(&mut self, dt_ms: f32) {
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        let y = anim.tick(dt_ms);
        let finished = anim.is_finished();
        if finished {
            self.animation = None;
        }
        if self.viewport.scroll_to(y) {
            self.emit_scroll();
        }
    }

    /// Tick until the running animation settles, at a fixed frame interval.
    /// Returns the number of frames run.
    pub fn settle(&mut self, frame_ms: f32) -> usize {
        let mut frames = 0;
        while self.animation.is_some() && frame_ms > 0.0 {
            self.tick(frame_ms);
            frames += 1;
        }
        frames
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let mut snap = LayoutSnapshot::new(self.viewport.scroll_offset_y, self.viewport.width);
        for block in &self.blocks {
            snap.rects.insert(block.id.clone(), self.rect_of(block));
        }
        snap
    }

    fn rect_of(&self, block: &PageBlock) -> ElementRect {
        ElementRect::new(block.doc_top - self.viewport.scroll_offset_y, block.height)
    }

    fn emit_scroll(&self) {
        self.events.dispatch(&PageEvent::Scroll(self.snapshot()));
    }
}

impl Layout for SimulatedPage {
    fn scroll_y(&self) -> Option<f32> {
        Some(self.viewport.scroll_offset_y)
    }

    fn viewport_width(&self) -> f32 {
        self.viewport.width
    }

    fn element_rect(&self, id: &str) -> Option<ElementRect> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| self.rect_of(b))
    }
}

impl ScrollHost for SimulatedPage {
    fn smooth_scroll_to(&mut self, target_y: f32) {
        let target = self.viewport.clamp(target_y);
        match self.animation.as_mut() {
            Some(anim) => anim.retarget(target),
            None => {
                self.animation = Some(ScrollAnimation::new(
                    self.viewport.scroll_offset_y,
                    target,
                    self.timing,
                ))
            }
        }
    }
}

pub struct PageBuilder {
    viewport: Viewport,
    cursor: f32,
    blocks: Vec<PageBlock>,
    timing: ScrollTiming,
}

impl PageBuilder {
    /// Unnamed space above the next block.
    pub fn header(mut self, height: f32) -> Self {
        self.cursor += height.max(0.0);
        self
    }

    /// Unnamed space below the last block.
    pub fn footer(mut self, height: f32) -> Self {
        self.cursor += height.max(0.0);
        self
    }

    pub fn section(mut self, id: &str, height: f32) -> Self {
        self.blocks.push(PageBlock {
            id: id.to_string(),
            doc_top: self.cursor,
            height,
        });
        self.cursor += height.max(0.0);
        self
    }

    pub fn build(mut self) -> SimulatedPage {
        self.viewport.set_content_height(self.cursor);
        SimulatedPage {
            viewport: self.viewport,
            blocks: self.blocks,
            timing: self.timing,
            animation: None,
            events: EventTarget::new(),
        }
    }
}
