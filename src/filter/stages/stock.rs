use crate::filter::traits::ProductFilter;
use crate::model::{Product, StockFilter};

/// Keeps products whose stock quantity satisfies a stock criterion.
pub struct StockStatusFilter {
    status: StockFilter,
}

impl StockStatusFilter {
    pub fn new(status: StockFilter) -> Self {
        Self { status }
    }
}

impl ProductFilter for StockStatusFilter {
    fn name(&self) -> &str {
        "StockStatusFilter"
    }

    fn keep(&self, product: &Product) -> bool {
        self.status.matches(product.stock_quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductData};

    fn stocked(id: &str, quantity: u32) -> Product {
        Product::new(id, ProductData::new(format!("Item {id}"), 1.0, Category::Other, quantity))
    }

    fn ids(status: StockFilter) -> Vec<String> {
        let products = vec![stocked("zero", 0), stocked("two", 2), stocked("four", 4), stocked("five", 5)];
        StockStatusFilter::new(status)
            .apply(products)
            .iter()
            .map(|p| p.id().to_string())
            .collect()
    }

    #[test]
    fn test_stock_statuses() {
        assert_eq!(ids(StockFilter::InStock), vec!["two", "four", "five"]);
        assert_eq!(ids(StockFilter::OutOfStock), vec!["zero"]);
        assert_eq!(ids(StockFilter::LowStock), vec!["two", "four"]);
        assert_eq!(ids(StockFilter::All).len(), 4);
    }
}
