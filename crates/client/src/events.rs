//! Event bus for republishing companion state changes.
//!
//! Push-based subscription model: subscribers register callbacks that are
//! invoked, synchronously with the corresponding state update, whenever the
//! client decodes a new snapshot or receives a conversational reply.

use std::sync::Arc;
use tokio::sync::Mutex;

use animus_domain::{AvatarState, EmotionState};

/// Notifications published by [`StateSyncClient`](crate::StateSyncClient).
#[derive(Debug, Clone)]
pub enum StateEvent {
    /// A new emotional state snapshot was decoded
    EmotionChanged(EmotionState),
    /// A new avatar state snapshot was decoded
    AvatarChanged(AvatarState),
    /// The companion replied to a `talk` message
    ResponseReceived(String),
}

/// Event bus for companion state notifications.
///
/// Push-based: subscribers register callbacks that are invoked for every
/// event. The bus holds strong references to subscribers, so they persist
/// until explicitly cleared or the bus is dropped.
#[derive(Clone)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Box<dyn FnMut(StateEvent) + Send + 'static>>>>,
}

impl EventBus {
    /// Create a new EventBus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe to all events.
    ///
    /// The callback is invoked for every event the client publishes.
    pub async fn subscribe(&self, callback: impl FnMut(StateEvent) + Send + 'static) {
        self.subscribers.lock().await.push(Box::new(callback));
    }

    /// Dispatch an event to all subscribers.
    ///
    /// Each subscriber's callback is invoked with a clone of the event, in
    /// subscription order.
    pub async fn dispatch(&self, event: StateEvent) {
        let mut subscribers = self.subscribers.lock().await;
        for subscriber in subscribers.iter_mut() {
            subscriber(event.clone());
        }
    }

    /// Get the number of subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.lock().await.len()
    }

    /// Clear all subscribers.
    pub async fn clear(&self) {
        self.subscribers.lock().await.clear();
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_dispatch_reaches_all_subscribers() {
        let bus = EventBus::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;
        let counter = second.clone();
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;

        bus.dispatch(StateEvent::ResponseReceived("hi".to_string()))
            .await;
        bus.dispatch(StateEvent::EmotionChanged(EmotionState::neutral()))
            .await;

        assert_eq!(first.load(Ordering::SeqCst), 2);
        assert_eq!(second.load(Ordering::SeqCst), 2);
        assert_eq!(bus.subscriber_count().await, 2);
    }

    #[tokio::test]
    async fn test_clear_removes_subscribers() {
        let bus = EventBus::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = calls.clone();
        bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;
        bus.clear().await;
        bus.dispatch(StateEvent::ResponseReceived("hi".to_string()))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(bus.subscriber_count().await, 0);
    }
}
