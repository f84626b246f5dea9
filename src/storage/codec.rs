use super::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Turns values into stored text and back.
///
/// [`JsonCodec`] is the default; supply another implementation to
/// [`PersistentStore::with_codec`](super::PersistentStore::with_codec) to change the stored form.
pub trait Codec: Send + Sync {
    fn encode<T: Serialize>(&self, key: &str, value: &T) -> Result<String, StorageError>;

    fn decode<T: DeserializeOwned>(&self, key: &str, raw: &str) -> Result<T, StorageError>;
}

/// Plain JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, key: &str, value: &T) -> Result<String, StorageError> {
        serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, key: &str, raw: &str) -> Result<T, StorageError> {
        serde_json::from_str(raw).map_err(|e| StorageError::Deserialize {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}
