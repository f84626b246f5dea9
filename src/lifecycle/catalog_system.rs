use crate::catalog::{self, CatalogActor, CatalogClient, CatalogError};
use crate::config::CatalogConfig;
use crate::notify::{Notifier, TracingNotifier};
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running catalog: its actor task and a client to talk to it.
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&load_config()?);
///
/// let product = system.client.add_product(data).await?;
/// let snapshot = system.client.snapshot().await?;
///
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the catalog actor. Clone it freely.
    pub client: CatalogClient,

    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Starts the catalog with storage chosen by `config` and notifications sent to the log.
    ///
    /// Products are kept in files under `config.storage_dir` when it is set,
    /// and in memory otherwise.
    pub fn new(config: &CatalogConfig) -> Self {
        let storage: Box<dyn KeyValueStorage> = match &config.storage_dir {
            Some(dir) => {
                info!(dir = %dir.display(), "Using file storage");
                Box::new(FileStorage::new(dir))
            }
            None => {
                info!("Using in-memory storage");
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_parts(config, storage, Arc::new(TracingNotifier))
    }

    /// Starts the catalog with the given storage and notifier.
    pub fn with_parts(
        config: &CatalogConfig,
        storage: Box<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (actor, client) = catalog::new(config, storage, notifier);
        Self::spawn(actor, client)
    }

    /// Starts an already constructed actor.
    pub fn spawn(actor: CatalogActor, client: CatalogClient) -> Self {
        let handle = tokio::spawn(actor.run());
        Self { client, handle }
    }

    /// Drops this system's client and waits for the actor to finish.
    ///
    /// The actor stops once every clone of the client is gone, so clones held
    /// elsewhere must be dropped first.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Catalog task failed");
            return Err(CatalogError::TaskFailed(e.to_string()));
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
