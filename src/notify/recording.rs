use super::{NotificationKind, Notifier};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// A notifier that records everything it receives, in order.
///
/// Clones share the same record, so a test can keep one handle and give another
/// to the catalog.
///
/// # Example
/// ```ignore
/// let notifier = RecordingNotifier::new();
/// let system = CatalogSystem::with_parts(&config, storage, Arc::new(notifier.clone()));
/// system.client.add_product(data).await?;
/// assert_eq!(notifier.messages(), vec!["Product added successfully!"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<VecDeque<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    /// Messages of the given kind.
    pub fn messages_of(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.message)
            .collect()
    }

    /// Removes and returns the oldest notification.
    pub fn pop(&self) -> Option<Notification> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).pop_front()
    }

    pub fn clear(&self) {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Notification {
                kind,
                message: message.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let notifier = RecordingNotifier::new();
        let handle = notifier.clone();

        notifier.success("first");
        notifier.error("second");

        assert_eq!(handle.messages(), vec!["first", "second"]);
        assert_eq!(handle.messages_of(NotificationKind::Error), vec!["second"]);
        assert_eq!(handle.pop().map(|n| n.kind), Some(NotificationKind::Success));

        handle.clear();
        assert!(notifier.notifications().is_empty());
    }
}
