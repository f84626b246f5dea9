//! Error types for the storage layer.

use thiserror::Error;

/// Errors raised by storage backends and codecs.
///
/// These never reach callers of [`PersistentStore`](super::PersistentStore);
/// they are logged and passed to its error callback instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A write would grow the store beyond its quota.
    #[error("Storage quota exceeded: {required} bytes required, quota is {quota} bytes")]
    QuotaExceeded { required: usize, quota: usize },

    /// The backend cannot be used at all (e.g. disabled or poisoned).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A value could not be turned into its stored form.
    #[error("Failed to serialize value for key '{key}': {message}")]
    Serialize { key: String, message: String },

    /// A stored value could not be read back.
    #[error("Failed to deserialize value for key '{key}': {message}")]
    Deserialize { key: String, message: String },
}
