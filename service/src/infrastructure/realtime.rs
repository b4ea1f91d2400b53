use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::broadcast;

use crate::domain::events::{LiveEvent, LiveEvents};

/// Fan-out point for the live feed. One sender, any number of WebSocket
/// subscribers; lagging subscribers lose events, which is acceptable for a
/// status/viewer-count feed.
///
/// The viewer count lives here as an explicit shared counter instead of a
/// free global; the hub is the single place that mutates it.
#[derive(Clone)]
pub struct RealtimeHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    sender: broadcast::Sender<LiveEvent>,
    viewers: AtomicI64,
}

impl RealtimeHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            inner: Arc::new(HubInner {
                sender,
                viewers: AtomicI64::new(0),
            }),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.inner.sender.subscribe()
    }

    pub fn viewers(&self) -> i64 {
        self.inner.viewers.load(Ordering::Relaxed)
    }

    /// Count a new listener in and tell everyone.
    pub fn viewer_joined(&self) -> i64 {
        let viewers = self.inner.viewers.fetch_add(1, Ordering::Relaxed) + 1;
        self.publish(LiveEvent::ViewersUpdated(viewers));
        viewers
    }

    pub fn viewer_left(&self) -> i64 {
        let viewers = self.inner.viewers.fetch_sub(1, Ordering::Relaxed) - 1;
        self.publish(LiveEvent::ViewersUpdated(viewers));
        viewers
    }
}

impl LiveEvents for RealtimeHub {
    fn publish(&self, event: LiveEvent) {
        // no subscribers is not an error, just an empty room
        let _ = self.inner.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_reach_every_subscriber() {
        let hub = RealtimeHub::new(16);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.publish(LiveEvent::ShowStopped);

        assert!(matches!(first.recv().await.unwrap(), LiveEvent::ShowStopped));
        assert!(matches!(second.recv().await.unwrap(), LiveEvent::ShowStopped));
    }

    #[tokio::test]
    async fn viewer_counter_tracks_joins_and_leaves() {
        let hub = RealtimeHub::new(16);
        let mut feed = hub.subscribe();

        assert_eq!(hub.viewer_joined(), 1);
        assert_eq!(hub.viewer_joined(), 2);
        assert_eq!(hub.viewer_left(), 1);
        assert_eq!(hub.viewers(), 1);

        // each change was broadcast
        for expected in [1, 2, 1] {
            match feed.recv().await.unwrap() {
                LiveEvent::ViewersUpdated(count) => assert_eq!(count, expected),
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let hub = RealtimeHub::new(16);
        hub.publish(LiveEvent::QuestionsUpdated);
    }
}
