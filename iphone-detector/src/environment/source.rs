//! Resize notification source.
//!
//! A listener registry in the shape of DOM event listeners: each
//! subscription gets its own unbounded channel, and removing the listener
//! (explicitly through an [`Unsubscribe`] handle, or by dropping the
//! subscription) takes effect immediately.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::trace;

/// A single raw viewport resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// Monotonic sequence number assigned by the source.
    pub sequence: u64,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, mpsc::UnboundedSender<ResizeEvent>)>,
}

impl Registry {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

/// Source of resize notifications.
///
/// Environments embed one of these and hand out subscriptions from
/// [`DisplayEnvironment::subscribe_resize`](super::DisplayEnvironment::subscribe_resize).
#[derive(Debug, Default)]
pub struct ResizeSource {
    registry: Arc<Mutex<Registry>>,
    next_sequence: AtomicU64,
}

impl ResizeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire a resize notification to every live subscription.
    ///
    /// Returns the number of subscriptions that received it.
    pub fn notify(&self) -> usize {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        let event = ResizeEvent { sequence };

        let mut registry = self.registry.lock();
        registry
            .listeners
            .retain(|(_, tx)| tx.send(event).is_ok());
        let delivered = registry.listeners.len();

        trace!(sequence, delivered, "Resize notification");
        delivered
    }

    /// Register a new listener.
    pub fn subscribe(&self) -> ResizeSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, tx));

        ResizeSubscription {
            rx,
            handle: Unsubscribe {
                id,
                registry: Arc::downgrade(&self.registry),
            },
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }
}

/// Handle that removes one listener from its source.
///
/// Cloneable and independent of the receiving end, so the owner of a
/// subscription can release it while another task is awaiting on it.
#[derive(Debug, Clone)]
pub struct Unsubscribe {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Unsubscribe {
    /// Remove the listener. Returns `false` if it was already removed.
    ///
    /// A pending [`ResizeSubscription::recv`] returns `None` once the
    /// already-queued notifications are drained.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.lock().remove(self.id),
            None => false,
        }
    }
}

/// Receiving end of a resize subscription.
///
/// Dropping it releases the subscription.
#[derive(Debug)]
pub struct ResizeSubscription {
    rx: mpsc::UnboundedReceiver<ResizeEvent>,
    handle: Unsubscribe,
}

impl ResizeSubscription {
    /// Wait for the next notification.
    ///
    /// Returns `None` once the listener is removed or the source is gone.
    pub async fn recv(&mut self) -> Option<ResizeEvent> {
        self.rx.recv().await
    }

    /// Handle for releasing this subscription from elsewhere.
    pub fn unsubscribe_handle(&self) -> Unsubscribe {
        self.handle.clone()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.handle.unsubscribe();
    }
}
