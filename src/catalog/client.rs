use super::actor::{CatalogRequest, Response};
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;
use crate::model::{FilterCriteria, Product, ProductData, ProductFormData};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

/// Cloneable handle to the [`CatalogActor`](super::CatalogActor).
///
/// Every method is one request and one reply. Once all clients are dropped the
/// actor finishes its loop.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> CatalogRequest,
    ) -> Result<T, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }

    /// Adds a product with a freshly generated id. Returns the stored record.
    #[instrument(skip(self, data))]
    pub async fn add_product(&self, data: ProductData) -> Result<Product, CatalogError> {
        debug!(?data, "add_product called");
        self.request(|respond_to| CatalogRequest::Add { data, respond_to })
            .await
    }

    /// Replaces every field of product `id` except its identity and creation time.
    #[instrument(skip(self, data))]
    pub async fn update_product(&self, id: &str, data: ProductData) -> Result<Product, CatalogError> {
        debug!(?data, "update_product called");
        let id = id.to_string();
        self.request(|respond_to| CatalogRequest::Update { id, data, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<(), CatalogError> {
        let id = id.to_string();
        self.request(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }

    /// Deletes every selected product. Returns the removed ids.
    #[instrument(skip(self))]
    pub async fn delete_selected(&self) -> Result<Vec<String>, CatalogError> {
        self.request(|respond_to| CatalogRequest::DeleteSelected { respond_to })
            .await
    }

    /// Flips the selection of `id`; returns the new state.
    pub async fn toggle_selection(&self, id: &str) -> Result<bool, CatalogError> {
        let id = id.to_string();
        self.request(|respond_to| CatalogRequest::ToggleSelection { id, respond_to })
            .await
    }

    pub async fn clear_selection(&self) -> Result<(), CatalogError> {
        self.request(|respond_to| CatalogRequest::ClearSelection { respond_to })
            .await
    }

    /// Replaces the filter criteria. A changed search term is debounced.
    #[instrument(skip(self, filters))]
    pub async fn set_filters(&self, filters: FilterCriteria) -> Result<(), CatalogError> {
        debug!(?filters, "set_filters called");
        self.request(|respond_to| CatalogRequest::SetFilters { filters, respond_to })
            .await
    }

    pub async fn clear_filters(&self) -> Result<(), CatalogError> {
        self.request(|respond_to| CatalogRequest::ClearFilters { respond_to })
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let id = id.to_string();
        self.request(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.request(|respond_to| CatalogRequest::Snapshot { respond_to })
            .await
    }

    /// Validates a submitted product form, then adds it, or updates `editing_id` when given.
    ///
    /// An invalid form is rejected with [`CatalogError::Validation`] before
    /// anything is sent to the actor.
    #[instrument(skip(self, form))]
    pub async fn submit_form(
        &self,
        form: ProductFormData,
        editing_id: Option<&str>,
    ) -> Result<Product, CatalogError> {
        let data = form.into_product_data().inspect_err(|errors| {
            warn!(fields = errors.len(), "Form rejected");
        })?;

        match editing_id {
            Some(id) => {
                info!(id, "Submitting product update");
                self.update_product(id, data).await
            }
            None => {
                info!("Submitting new product");
                self.add_product(data).await
            }
        }
    }
}
