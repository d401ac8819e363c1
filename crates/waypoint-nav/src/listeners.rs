//! Scoped event listeners.
//!
//! [`EventTarget::add_listener`] returns a [`ListenerGuard`]; dropping the
//! guard removes the listener. A view that holds its guards for as long as it
//! is mounted can't leave a callback behind after teardown.
//!
//! Everything here is single-threaded: handlers run synchronously inside
//! [`EventTarget::dispatch`], one at a time.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::layout::LayoutSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Scroll,
    Resize,
}

/// Events a page emits to the navigation chrome.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The scroll offset changed; carries the geometry at that moment.
    Scroll(LayoutSnapshot),
    /// The viewport was resized to this width.
    Resize { viewport_width: f32 },
}

impl PageEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll(_) => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Passive handlers promise not to block the host's own scrolling.
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: Self = Self { passive: true };
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self::PASSIVE
    }
}

type Handler = Rc<RefCell<dyn FnMut(&PageEvent)>>;

struct Slot {
    id: u64,
    kind: EventKind,
    options: ListenerOptions,
    handler: Handler,
}

type Slots = Rc<RefCell<Vec<Slot>>>;

#[derive(Default)]
pub struct EventTarget {
    slots: Slots,
    next_id: Cell<u64>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(
        &self,
        kind: EventKind,
        options: ListenerOptions,
        handler: impl FnMut(&PageEvent) + 'static,
    ) -> ListenerGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.slots.borrow_mut().push(Slot {
            id,
            kind,
            options,
            handler: Rc::new(RefCell::new(handler)),
        });
        log::trace!("listener {} added for {:?} (passive={})", id, kind, options.passive);
        ListenerGuard {
            id,
            slots: Rc::downgrade(&self.slots),
        }
    }

    /// Call every listener registered for the event's kind, in registration
    /// order, and return how many ran.
    ///
    /// The listener list is copied first, so handlers may add or drop
    /// listeners while running. A handler that is already on the stack
    /// (re-entrant dispatch) is skipped.
    pub fn dispatch(&self, event: &PageEvent) -> usize {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .slots
            .borrow()
            .iter()
            .filter(|slot| slot.kind == kind)
            .map(|slot| Rc::clone(&slot.handler))
            .collect();

        let mut ran = 0;
        for handler in handlers {
            if let Ok(mut f) = handler.try_borrow_mut() {
                (&mut *f)(event);
                ran += 1;
            }
        }
        ran
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.slots.borrow().iter().filter(|s| s.kind == kind).count()
    }

    /// Whether every listener of `kind` was registered passive.
    pub fn all_passive(&self, kind: EventKind) -> bool {
        self.slots
            .borrow()
            .iter()
            .filter(|s| s.kind == kind)
            .all(|s| s.options.passive)
    }
}

/// Removes its listener when dropped.
#[must_use = "dropping the guard removes the listener immediately"]
pub struct ListenerGuard {
    id: u64,
    slots: Weak<RefCell<Vec<Slot>>>,
}

impl ListenerGuard {
    /// Remove the listener now. Same as dropping the guard.
    pub fn release(self) {}
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(slots) = self.slots.upgrade() {
            slots.borrow_mut().retain(|slot| slot.id != self.id);
            log::trace!("listener {} released", self.id);
        }
    }
}
