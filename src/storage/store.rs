use super::backend::KeyValueStorage;
use super::codec::{Codec, JsonCodec};
use super::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Callback invoked once for every storage failure.
pub type ErrorCallback = Arc<dyn Fn(&StorageError) + Send + Sync>;

/// Typed access to a [`KeyValueStorage`] backend.
///
/// No method here returns an error. Read failures fall back to the caller's
/// default, write failures leave the caller's in-memory value as it is, and
/// every failure is logged and handed to the `on_error` callback.
pub struct PersistentStore<S, C = JsonCodec> {
    backend: S,
    codec: C,
    on_error: Option<ErrorCallback>,
}

impl<S: KeyValueStorage> PersistentStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            codec: JsonCodec,
            on_error: None,
        }
    }
}

impl<S: KeyValueStorage, C: Codec> PersistentStore<S, C> {
    /// Replaces the codec used to encode and decode values.
    pub fn with_codec<C2: Codec>(self, codec: C2) -> PersistentStore<S, C2> {
        PersistentStore {
            backend: self.backend,
            codec,
            on_error: self.on_error,
        }
    }

    /// Installs the callback that receives storage failures.
    pub fn on_error(mut self, callback: impl Fn(&StorageError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Reads the value stored under `key`, or `default` when it is absent or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "No stored value");
                return default;
            }
            Err(e) => {
                self.report(key, "load", e);
                return default;
            }
        };

        match self.codec.decode(key, &raw) {
            Ok(value) => value,
            Err(e) => {
                self.report(key, "load", e);
                default
            }
        }
    }

    /// Writes `value` under `key`. Returns whether the write succeeded.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let result = self
            .codec
            .encode(key, value)
            .and_then(|raw| self.backend.set_item(key, &raw));
        match result {
            Ok(()) => {
                debug!(key, "Saved");
                true
            }
            Err(e) => {
                self.report(key, "save", e);
                false
            }
        }
    }

    /// Deletes `key`; later loads return their default.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            self.report(key, "remove", e);
        }
    }

    /// Read-modify-write in one call: applies `f` to the stored value (or
    /// `default`) and saves the result.
    ///
    /// Returns the new value even if saving it failed.
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let next = f(self.load(key, default));
        self.save(key, &next);
        next
    }

    fn report(&self, key: &str, operation: &str, error: StorageError) {
        warn!(key, operation, error = %error, "Storage operation failed");
        if let Some(callback) = &self.on_error {
            callback(&error);
        }
    }
}

impl<S: fmt::Debug, C: fmt::Debug> fmt::Debug for PersistentStore<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore")
            .field("backend", &self.backend)
            .field("codec", &self.codec)
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
