use super::error::CatalogError;
use crate::model::{Product, ProductData};
use std::collections::HashSet;
use tracing::warn;

/// The product collection and the current selection.
///
/// Products keep insertion order. Selected ids keep the order in which they
/// were selected, and always refer to products in the collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    selected: Vec<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Replaces the whole collection, dropping selections of products that are gone.
    ///
    /// Ids must be unique, so when several records share an id only the first
    /// is kept. Returns the ids of the dropped records.
    pub fn set_products(&mut self, products: Vec<Product>) -> Vec<String> {
        let mut seen = HashSet::with_capacity(products.len());
        let mut dropped = Vec::new();
        self.products = products
            .into_iter()
            .filter(|p| {
                let first = seen.insert(p.id().to_string());
                if !first {
                    dropped.push(p.id().to_string());
                }
                first
            })
            .collect();
        if !dropped.is_empty() {
            warn!(?dropped, "Dropped products with duplicate ids");
        }

        let products = &self.products;
        self.selected.retain(|id| products.iter().any(|p| p.id() == id));
        dropped
    }

    pub fn add(&mut self, product: Product) -> Result<(), CatalogError> {
        if self.get(product.id()).is_some() {
            return Err(CatalogError::DuplicateId(product.id().to_string()));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replaces the record's fields in place. Returns the updated product.
    pub fn update(&mut self, id: &str, data: ProductData) -> Result<&Product, CatalogError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        product.replace(data);
        Ok(&*product)
    }

    /// Removes the product and its selection. Returns the removed product.
    pub fn delete(&mut self, id: &str) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.selected.retain(|s| s != id);
        Ok(self.products.remove(index))
    }

    /// Deletes every selected product and clears the selection.
    ///
    /// Returns the removed ids in collection order.
    pub fn delete_selected(&mut self) -> Vec<String> {
        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::with_capacity(selected.len());
        self.products.retain(|p| {
            let keep = !selected.iter().any(|id| id == p.id());
            if !keep {
                removed.push(p.id().to_string());
            }
            keep
        });
        removed
    }

    /// Flips the selection of `id`. Returns whether it is now selected.
    pub fn toggle_selection(&mut self, id: &str) -> Result<bool, CatalogError> {
        if self.get(id).is_none() {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        if let Some(index) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(index);
            Ok(false)
        } else {
            self.selected.push(id.to_string());
            Ok(true)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
