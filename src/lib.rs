//! Lifecycle-scoped keyboard event subscriptions.
//!
//! This crate bridges a UI component's lifetime to a global keyboard
//! listener, filtered by key identity. The host application owns a
//! [`KeyEventDispatcher`], feeds it key events from its event loop, and each
//! component expresses interest in one key through a [`KeyEventHook`] that
//! the host attaches at mount and detaches at unmount.
//!
//! Features:
//! - Explicit subscription handles instead of a global mutable listener list
//! - Exact key-identifier matching per event kind (pressed / released)
//! - winit interop via [`KeyEvent::from_winit`]

mod event;
mod subscription;

pub use event::{KeyEvent, KeyEventKind, key_name};
pub use subscription::{KeyEventHook, SubscriptionId};

use std::fmt;
use std::sync::Arc;

/// Handler invoked with each matching event.
pub type KeyEventHandler = Arc<dyn Fn(&KeyEvent)>;

/// Registry of key subscriptions, delivering matching events to handlers.
///
/// Disposal is keyed by the [`SubscriptionId`] returned at registration, so
/// removing a subscription always removes exactly the entry that was
/// registered, regardless of how many subscriptions share a handler or a
/// key.
#[derive(Default)]
pub struct KeyEventDispatcher {
    /// Live subscriptions in registration order.
    subscriptions: Vec<Subscription>,
    /// Source of unique ids. Ids are never reused within a dispatcher.
    next_id: u64,
}

struct Subscription {
    id: SubscriptionId,
    kind: KeyEventKind,
    key: String,
    handler: KeyEventHandler,
}

impl KeyEventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind` whose key equals `key`.
    ///
    /// Returns the handle to pass to [`unsubscribe`](Self::unsubscribe).
    /// Handlers are invoked in registration order.
    pub fn subscribe(
        &mut self,
        kind: KeyEventKind,
        key: impl Into<String>,
        handler: KeyEventHandler,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let key = key.into();

        log::debug!("Registered subscription {:?}: {:?} key '{}'", id, kind, key);
        self.subscriptions.push(Subscription {
            id,
            kind,
            key,
            handler,
        });
        id
    }

    /// Remove the subscription registered under `id`.
    ///
    /// Returns `true` if a subscription was removed. An unknown handle
    /// (already disposed, or from another dispatcher) is logged and ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != id);
        let removed = self.subscriptions.len() < before;

        if removed {
            log::debug!("Removed subscription {:?}", id);
        } else {
            log::warn!("Unsubscribe for unknown subscription {:?}", id);
        }
        removed
    }

    /// Deliver an event to every matching subscription.
    ///
    /// A subscription matches when its kind equals the event's kind and its
    /// key equals the event's key exactly. Handlers run synchronously on the
    /// calling thread, in registration order.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &KeyEvent) -> usize {
        let mut invoked = 0;
        for sub in &self.subscriptions {
            if sub.kind == event.kind && sub.key == event.key {
                (sub.handler)(event);
                invoked += 1;
            }
        }

        if invoked > 0 {
            log::trace!(
                "Dispatched {:?} '{}' to {} subscription(s)",
                event.kind,
                event.key,
                invoked
            );
        }
        invoked
    }

    /// Get the number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if the dispatcher has any subscriptions.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl fmt::Debug for KeyEventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEventDispatcher")
            .field("subscriptions", &self.subscriptions.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
