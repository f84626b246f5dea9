use crate::model::{FilterCriteria, Product};
use serde::Serialize;

/// A point-in-time copy of the catalog, as a view would render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// The whole collection, in insertion order.
    pub products: Vec<Product>,
    /// The products passing the current filters.
    pub filtered: Vec<Product>,
    /// Selected product ids, in selection order.
    pub selected: Vec<String>,
    /// The filters as last set. `filters.search` may not be applied yet; see `search_pending`.
    pub filters: FilterCriteria,
    /// A search change is waiting out the debounce.
    pub search_pending: bool,
}

impl CatalogSnapshot {
    pub fn total(&self) -> usize {
        self.products.len()
    }

    pub fn visible(&self) -> usize {
        self.filtered.len()
    }

    /// e.g. "3 of 10 products"
    pub fn summary(&self) -> String {
        format!("{} of {} products", self.visible(), self.total())
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductData};

    #[test]
    fn test_summary_counts() {
        let products: Vec<Product> = (0..4)
            .map(|i| Product::new(i.to_string(), ProductData::new("Desk Lamp", 20.0, Category::Home, 1)))
            .collect();
        let snapshot = CatalogSnapshot {
            filtered: products[..1].to_vec(),
            products,
            selected: vec![],
            filters: FilterCriteria::default(),
            search_pending: false,
        };

        assert_eq!(snapshot.total(), 4);
        assert_eq!(snapshot.visible(), 1);
        assert_eq!(snapshot.summary(), "1 of 4 products");
        assert!(!snapshot.has_selection());
    }
}
