//! Explicit listener registry replacing the host's signal/slot model.
//!
//! Subscriptions are plain values: `connect` hands back a [`ListenerId`] the
//! owner must keep to `disconnect` later. This makes listener lifecycle
//! ownership explicit: the [`WorkspaceBar`](crate::workspace_bar::WorkspaceBar)
//! collects every id it connects during `initialize` and drains the list in
//! `teardown`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle identifying one connected listener on one source.
pub type ListenerId = u64;

/// A source of parameterless change notifications.
///
/// The reconciler rebuilds everything on any change, so signals carry no
/// payload; which source fired is enough.
pub trait EventSource {
    /// Registers `listener` and returns its id.
    fn connect(&self, listener: Rc<dyn Fn()>) -> ListenerId;

    /// Removes a listener. Returns `false` if the id was not attached;
    /// disconnecting twice is a harmless no-op.
    fn disconnect(&self, id: ListenerId) -> bool;
}

/// In-process [`EventSource`] implementation.
///
/// Hosts adapt their native signals by emitting into one of these; tests
/// drive it directly.
#[derive(Default)]
pub struct ChangeSignal {
    next_id: Cell<ListenerId>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every currently connected listener.
    ///
    /// The listener list is snapshotted first so a handler may connect or
    /// disconnect during delivery without poisoning the borrow.
    pub fn emit(&self) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of currently connected listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl EventSource for ChangeSignal {
    fn connect(&self, listener: Rc<dyn Fn()>) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn disconnect(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_all_listeners() {
        let signal = ChangeSignal::new();
        let hits = Rc::new(Cell::new(0u32));

        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            signal.connect(Rc::new(move || hits.set(hits.get() + 1)));
        }
        signal.emit();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn disconnect_removes_exactly_one_listener() {
        let signal = ChangeSignal::new();
        let hits = Rc::new(Cell::new(0u32));

        let hits_a = Rc::clone(&hits);
        let a = signal.connect(Rc::new(move || hits_a.set(hits_a.get() + 1)));
        let hits_b = Rc::clone(&hits);
        let _b = signal.connect(Rc::new(move || hits_b.set(hits_b.get() + 1)));

        assert!(signal.disconnect(a));
        signal.emit();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn double_disconnect_is_a_noop() {
        let signal = ChangeSignal::new();
        let id = signal.connect(Rc::new(|| {}));
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        assert!(!signal.disconnect(999));
    }

    #[test]
    fn listener_may_disconnect_during_emit() {
        let signal = Rc::new(ChangeSignal::new());
        let id_slot = Rc::new(Cell::new(None::<ListenerId>));

        let signal_inner = Rc::clone(&signal);
        let id_slot_inner = Rc::clone(&id_slot);
        let id = signal.connect(Rc::new(move || {
            if let Some(id) = id_slot_inner.get() {
                signal_inner.disconnect(id);
            }
        }));
        id_slot.set(Some(id));

        signal.emit();
        assert_eq!(signal.listener_count(), 0);
        signal.emit(); // nothing left to fire, must not panic
    }
}
