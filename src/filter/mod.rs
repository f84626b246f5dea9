//! Derivation of the displayed product list from the collection and the filter criteria.
//!
//! [`filter_products`] is the entry point. It borrows the collection, never
//! mutates it, and returns the kept products in collection order.

pub mod pipeline;
pub mod stages;
pub mod traits;

pub use pipeline::FilterPipeline;
pub use traits::ProductFilter;

use crate::model::{FilterCriteria, Product};

/// Returns the products that pass every active criterion, in their original order.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    if pipeline.is_empty() {
        return products.to_vec();
    }
    pipeline.apply(products.to_vec())
}
