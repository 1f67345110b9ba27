//! Subscription handles and the component lifecycle bridge.

use std::fmt;
use std::sync::Arc;

use crate::{KeyEvent, KeyEventDispatcher, KeyEventHandler, KeyEventKind};

/// Opaque handle identifying one subscription within a dispatcher.
///
/// Returned by [`KeyEventDispatcher::subscribe`] and consumed by
/// [`KeyEventDispatcher::unsubscribe`]. Handles are never reused within a
/// dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Binds one key subscription to a UI component's lifetime.
///
/// The host UI layer calls [`attach`](Self::attach) when the component
/// mounts and [`detach`](Self::detach) when it unmounts. The hook stores the
/// handle returned at attach and disposes exactly that handle at detach, so
/// repeated mount/unmount cycles cannot leave subscriptions behind.
pub struct KeyEventHook {
    kind: KeyEventKind,
    key: String,
    handler: KeyEventHandler,
    /// Handle of the live subscription while attached.
    active: Option<SubscriptionId>,
}

impl KeyEventHook {
    /// Create a detached hook for `kind` events on `key`.
    ///
    /// The handler is shared across attach/detach cycles, so remounting a
    /// component re-registers the same handler.
    pub fn new(
        kind: KeyEventKind,
        key: impl Into<String>,
        handler: impl Fn(&KeyEvent) + 'static,
    ) -> Self {
        Self {
            kind,
            key: key.into(),
            handler: Arc::new(handler),
            active: None,
        }
    }

    /// Register with the dispatcher. The host calls this at component mount.
    ///
    /// Attaching an already-attached hook is logged and ignored; the
    /// existing subscription stays live.
    pub fn attach(&mut self, dispatcher: &mut KeyEventDispatcher) {
        if let Some(id) = self.active {
            log::warn!(
                "Hook for {:?} key '{}' already attached as {:?}",
                self.kind,
                self.key,
                id
            );
            return;
        }

        let id = dispatcher.subscribe(self.kind, self.key.clone(), Arc::clone(&self.handler));
        self.active = Some(id);
    }

    /// Deregister from the dispatcher. The host calls this at component
    /// unmount. Detaching a detached hook is a no-op.
    pub fn detach(&mut self, dispatcher: &mut KeyEventDispatcher) {
        if let Some(id) = self.active.take() {
            dispatcher.unsubscribe(id);
        }
    }

    /// Check whether the hook currently holds a live subscription.
    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// The key this hook listens for.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The event kind this hook listens for.
    pub fn kind(&self) -> KeyEventKind {
        self.kind
    }
}

impl fmt::Debug for KeyEventHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyEventHook")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("active", &self.active)
            .finish()
    }
}
