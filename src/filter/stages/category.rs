use crate::filter::traits::ProductFilter;
use crate::model::{CategoryFilter, Product};

/// Keeps products whose category passes the criterion.
pub struct CategoryFilterStage {
    category: CategoryFilter,
}

impl CategoryFilterStage {
    pub fn new(category: CategoryFilter) -> Self {
        Self { category }
    }
}

impl ProductFilter for CategoryFilterStage {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn keep(&self, product: &Product) -> bool {
        self.category.matches(product.category)
    }
}
