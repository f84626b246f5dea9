//! Core trait for the product filter pipeline.

use crate::model::Product;

/// A single stage of the filter pipeline.
///
/// ## Design Note
/// - Stages take ownership of the working list and return the kept products
///   in their original relative order
/// - `Send + Sync` lets a built pipeline be shared across tasks
pub trait ProductFilter: Send + Sync {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `product` passes this stage.
    fn keep(&self, product: &Product) -> bool;

    /// Apply this stage to the working list.
    fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        products.retain(|product| self.keep(product));
        products
    }
}
