//! Persistence of catalog state in key-value storage.
//!
//! - [`KeyValueStorage`] is the raw string store ([`MemoryStorage`], [`FileStorage`])
//! - [`Codec`] turns values into stored text ([`JsonCodec`] by default)
//! - [`PersistentStore`] combines the two and absorbs every failure: reads fall
//!   back to a default, and errors go to a callback instead of the caller

pub mod backend;
pub mod codec;
pub mod error;
pub mod store;

pub use backend::*;
pub use codec::*;
pub use error::*;
pub use store::*;
