//! Fire-and-forget user notifications.
//!
//! The catalog reports the outcome of each action through a [`Notifier`]. A UI
//! would show these as toasts; [`TracingNotifier`] writes them to the log and
//! [`RecordingNotifier`] keeps them for assertions in tests.

mod recording;

pub use recording::*;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, warn};

pub const PRODUCT_ADDED: &str = "Product added successfully!";
pub const PRODUCT_UPDATED: &str = "Product updated successfully!";
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";

/// Message for a bulk delete of `count` products.
pub fn products_deleted(count: usize) -> String {
    format!("{count} products deleted successfully!")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Receives notifications. Implementations must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }
}

/// Writes notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => info!(%kind, "{message}"),
            NotificationKind::Error => warn!(%kind, "{message}"),
        }
    }
}
