//! Free-text search over product name and description.

use crate::filter::traits::ProductFilter;
use crate::model::Product;

/// Keeps products whose name or description contains the search text, ignoring case.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }
}

impl ProductFilter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn keep(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.needle)
            || product
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ProductData};

    #[test]
    fn test_matches_name_or_description() {
        let laptop = Product::new("1", ProductData::new("Gaming Laptop", 1200.0, Category::Electronics, 3));
        let bag = Product::new(
            "2",
            ProductData::new("Carry Bag", 40.0, Category::Other, 8).with_description("Fits a LAPTOP up to 15\""),
        );
        let book = Product::new("3", ProductData::new("Rust in Action", 35.0, Category::Books, 1));

        let filter = SearchFilter::new("Laptop");
        let kept = filter.apply(vec![laptop, bag, book]);

        let ids: Vec<&str> = kept.iter().map(Product::id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
