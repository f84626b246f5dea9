use super::client::CatalogClient;
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;
use super::state::CatalogState;
use crate::config::CatalogConfig;
use crate::filter::filter_products;
use crate::model::{FilterCriteria, Product, ProductData};
use crate::notify::{self, Notifier};
use crate::storage::{KeyValueStorage, PersistentStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Named actions accepted by the [`CatalogActor`].
///
/// Every change to the catalog goes through one of these; nothing outside the
/// actor holds a mutable reference to the collection.
#[derive(Debug)]
pub enum CatalogRequest {
    Add {
        data: ProductData,
        respond_to: Response<Product>,
    },
    Update {
        id: String,
        data: ProductData,
        respond_to: Response<Product>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
    DeleteSelected {
        respond_to: Response<Vec<String>>,
    },
    ToggleSelection {
        id: String,
        respond_to: Response<bool>,
    },
    ClearSelection {
        respond_to: Response<()>,
    },
    SetFilters {
        filters: FilterCriteria,
        respond_to: Response<()>,
    },
    ClearFilters {
        respond_to: Response<()>,
    },
    Get {
        id: String,
        respond_to: Response<Option<Product>>,
    },
    Snapshot {
        respond_to: Response<CatalogSnapshot>,
    },
}

/// The task that owns the product collection.
///
/// Requests are processed one at a time, so the state needs no locks. After
/// each change to the collection the whole collection is written to storage
/// and the filtered view is recomputed.
///
/// A changed search term is applied only after `search_debounce` passes with
/// no further search change. Other filter fields apply at once.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    state: CatalogState,
    filters: FilterCriteria,
    applied_search: String,
    search_deadline: Option<Instant>,
    search_debounce: Duration,
    filtered: Vec<Product>,
    storage_key: String,
    store: PersistentStore<Box<dyn KeyValueStorage>>,
    notifier: Arc<dyn Notifier>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl CatalogActor {
    /// Creates the actor and its client. Storage failures are reported to `notifier`.
    pub fn new(
        config: &CatalogConfig,
        storage: Box<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity.max(1));

        let error_notifier = notifier.clone();
        let store = PersistentStore::new(storage).on_error(move |e| {
            error_notifier.error(&e.to_string());
        });

        let actor = Self {
            receiver,
            state: CatalogState::new(),
            filters: FilterCriteria::default(),
            applied_search: String::new(),
            search_deadline: None,
            search_debounce: config.search_debounce(),
            filtered: Vec::new(),
            storage_key: config.storage_key.clone(),
            store,
            notifier,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = CatalogClient::new(sender);
        (actor, client)
    }

    /// Loads the stored collection, then processes requests until every client is dropped.
    pub async fn run(mut self) {
        let loaded: Vec<Product> = self.store.load(&self.storage_key, Vec::new());
        self.state.set_products(loaded);
        self.refresh();
        info!(key = %self.storage_key, size = self.state.len(), "Catalog actor started");

        loop {
            let deadline = self.search_deadline;
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(request) => self.handle(request),
                    None => break,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.apply_search();
                }
            }
        }

        if self.search_deadline.is_some() {
            debug!(search = %self.filters.search, "Discarding pending search");
        }
        info!(size = self.state.len(), "Shutdown");
    }

    fn handle(&mut self, request: CatalogRequest) {
        match request {
            CatalogRequest::Add { data, respond_to } => {
                debug!(?data, "Add");
                let product = Product::new((self.next_id_fn)(), data);
                let result = self.state.add(product.clone()).map(|()| product);
                match &result {
                    Ok(product) => {
                        info!(id = %product.id(), size = self.state.len(), "Added");
                        self.collection_changed();
                        self.notifier.success(notify::PRODUCT_ADDED);
                    }
                    Err(e) => warn!(error = %e, "Add failed"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::Update { id, data, respond_to } => {
                debug!(%id, ?data, "Update");
                let result = self.state.update(&id, data).cloned();
                match &result {
                    Ok(_) => {
                        info!(%id, "Updated");
                        self.collection_changed();
                        self.notifier.success(notify::PRODUCT_UPDATED);
                    }
                    Err(e) => warn!(%id, error = %e, "Update failed"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::Delete { id, respond_to } => {
                debug!(%id, "Delete");
                let result = self.state.delete(&id).map(|_| ());
                match &result {
                    Ok(()) => {
                        info!(%id, size = self.state.len(), "Deleted");
                        self.collection_changed();
                        self.notifier.success(notify::PRODUCT_DELETED);
                    }
                    Err(e) => warn!(%id, error = %e, "Delete failed"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::DeleteSelected { respond_to } => {
                let removed = self.state.delete_selected();
                debug!(?removed, "DeleteSelected");
                if !removed.is_empty() {
                    info!(count = removed.len(), size = self.state.len(), "Deleted selection");
                    self.collection_changed();
                    self.notifier.success(&notify::products_deleted(removed.len()));
                }
                let _ = respond_to.send(Ok(removed));
            }
            CatalogRequest::ToggleSelection { id, respond_to } => {
                let result = self.state.toggle_selection(&id);
                match &result {
                    Ok(selected) => debug!(%id, selected, "ToggleSelection"),
                    Err(e) => warn!(%id, error = %e, "ToggleSelection failed"),
                }
                let _ = respond_to.send(result);
            }
            CatalogRequest::ClearSelection { respond_to } => {
                debug!("ClearSelection");
                self.state.clear_selection();
                let _ = respond_to.send(Ok(()));
            }
            CatalogRequest::SetFilters { filters, respond_to } => {
                debug!(?filters, "SetFilters");
                self.set_filters(filters);
                let _ = respond_to.send(Ok(()));
            }
            CatalogRequest::ClearFilters { respond_to } => {
                debug!("ClearFilters");
                self.set_filters(FilterCriteria::default());
                let _ = respond_to.send(Ok(()));
            }
            CatalogRequest::Get { id, respond_to } => {
                let product = self.state.get(&id).cloned();
                debug!(%id, found = product.is_some(), "Get");
                let _ = respond_to.send(Ok(product));
            }
            CatalogRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(Ok(self.snapshot()));
            }
        }
    }

    fn set_filters(&mut self, filters: FilterCriteria) {
        let search_changed = filters.search != self.filters.search;
        self.filters = filters;

        if search_changed {
            if self.search_debounce.is_zero() {
                self.applied_search = self.filters.search.clone();
                self.search_deadline = None;
            } else {
                // Each keystroke restarts the quiet period.
                self.search_deadline = Some(Instant::now() + self.search_debounce);
            }
        }
        self.refresh();
    }

    fn apply_search(&mut self) {
        self.search_deadline = None;
        self.applied_search = self.filters.search.clone();
        debug!(search = %self.applied_search, "Search applied");
        self.refresh();
    }

    fn collection_changed(&mut self) {
        self.store.save(&self.storage_key, &self.state.products());
        self.refresh();
    }

    /// Recomputes the filtered view from the collection, the filters, and the
    /// search term that has outlived the debounce.
    fn refresh(&mut self) {
        let criteria = FilterCriteria {
            search: self.applied_search.clone(),
            ..self.filters.clone()
        };
        self.filtered = filter_products(self.state.products(), &criteria);
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.state.products().to_vec(),
            filtered: self.filtered.clone(),
            selected: self.state.selected().to_vec(),
            filters: self.filters.clone(),
            search_pending: self.search_deadline.is_some(),
        }
    }
}
