//! Inclusive price bounds.

use crate::filter::traits::ProductFilter;
use crate::model::Product;

/// Keeps products priced at or above a minimum.
pub struct MinPriceFilter {
    min: f64,
}

impl MinPriceFilter {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl ProductFilter for MinPriceFilter {
    fn name(&self) -> &str {
        "MinPriceFilter"
    }

    fn keep(&self, product: &Product) -> bool {
        product.price >= self.min
    }
}

/// Keeps products priced at or below a maximum.
pub struct MaxPriceFilter {
    max: f64,
}

impl MaxPriceFilter {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl ProductFilter for MaxPriceFilter {
    fn name(&self) -> &str {
        "MaxPriceFilter"
    }

    fn keep(&self, product: &Product) -> bool {
        product.price <= self.max
    }
}
