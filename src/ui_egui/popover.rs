//! Popover visibility and outside-interaction dismissal.
//!
//! The outside-click listener is a handle acquired when the popover opens and
//! released when it closes. Release happens in `Drop`, so tearing down the
//! controller while open cannot leave a listener behind.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use egui::{Pos2, Rect};

/// Shared table of live outside-click listeners.
///
/// Cloning yields another handle to the same table, so several pickers on a
/// page can report into one registry.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    inner: Rc<RegistryInner>,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: Cell<u64>,
    active: RefCell<BTreeSet<u64>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently installed.
    pub fn active_count(&self) -> usize {
        self.inner.active.borrow().len()
    }

    fn acquire(&self) -> u64 {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.active.borrow_mut().insert(id);
        log::debug!("Outside-click listener {} installed", id);
        id
    }

    fn release(&self, id: u64) {
        if self.inner.active.borrow_mut().remove(&id) {
            log::debug!("Outside-click listener {} removed", id);
        }
    }
}

/// Installed outside-click listener. Removed from its registry on drop.
#[derive(Debug)]
pub struct OutsideClickListener {
    registry: ListenerRegistry,
    id: u64,
    bounds: Option<Rect>,
}

impl OutsideClickListener {
    fn install(registry: &ListenerRegistry) -> Self {
        Self {
            registry: registry.clone(),
            id: registry.acquire(),
            bounds: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether `pos` lies outside the widget. Nothing counts as outside until
    /// the widget has reported its bounds.
    pub fn is_outside(&self, pos: Pos2) -> bool {
        self.bounds.is_some_and(|bounds| !bounds.contains(pos))
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

/// Open/closed state of the calendar panel. Starts closed.
#[derive(Debug, Default)]
pub struct PopoverController {
    registry: ListenerRegistry,
    listener: Option<OutsideClickListener>,
}

impl PopoverController {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            listener: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    /// Flip between open and closed. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Open and install the outside-click listener. Returns `false` if
    /// already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        log::debug!("Popover opened");
        self.listener = Some(OutsideClickListener::install(&self.registry));
        true
    }

    /// Close and remove the listener. Returns `false` if already closed.
    pub fn close(&mut self) -> bool {
        match self.listener.take() {
            Some(listener) => {
                log::debug!("Popover closed (listener {})", listener.id());
                true
            }
            None => false,
        }
    }

    /// Record the widget's rendered boundary (trigger plus panel).
    pub fn set_bounds(&mut self, bounds: Rect) {
        if let Some(listener) = self.listener.as_mut() {
            listener.bounds = Some(bounds);
        }
    }

    /// Feed an interaction at `pos`. Closes the popover and returns `true`
    /// when it lies outside the widget; a closed popover ignores it.
    pub fn handle_interaction(&mut self, pos: Pos2) -> bool {
        let outside = self
            .listener
            .as_ref()
            .is_some_and(|listener| listener.is_outside(pos));
        if outside {
            log::debug!("Interaction outside picker at {:?}", pos);
            self.close();
        }
        outside
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }
}
