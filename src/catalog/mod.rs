//! # Catalog
//!
//! The state container for the product collection.
//!
//! - [`CatalogState`]: the collection and selection, with synchronous mutations.
//! - [`CatalogActor`]: owns a `CatalogState` in its own task, persists it, and
//!   keeps the filtered view current.
//! - [`CatalogClient`]: the cloneable handle used by everything else.
//! - [`CatalogSnapshot`]: what a view renders.

mod actor;
mod client;
pub mod error;
mod snapshot;
mod state;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use snapshot::*;
pub use state::*;

use crate::config::CatalogConfig;
use crate::notify::Notifier;
use crate::storage::KeyValueStorage;
use std::sync::Arc;
use uuid::Uuid;

/// Creates a catalog actor and its client, assigning random UUIDs to new products.
pub fn new(
    config: &CatalogConfig,
    storage: Box<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
) -> (CatalogActor, CatalogClient) {
    CatalogActor::new(config, storage, notifier, || Uuid::new_v4().to_string())
}
