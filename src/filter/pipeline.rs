//! The FilterPipeline chains product filter stages.

use super::stages::{CategoryFilterStage, MaxPriceFilter, MinPriceFilter, SearchFilter, StockStatusFilter};
use super::traits::ProductFilter;
use crate::model::{CategoryFilter, FilterCriteria, Product, StockFilter};
use crate::validation::parse_leading_f64;

/// Chains filter stages into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("lamp"))
///     .add_filter(MaxPriceFilter::new(50.0));
///
/// let visible = pipeline.apply(products.to_vec());
/// ```
#[derive(Default)]
pub struct FilterPipeline {
    filters: Vec<Box<dyn ProductFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the pipeline for `criteria`, leaving out every stage whose
    /// criterion is at its default or does not hold a usable number.
    ///
    /// Stage order: search, category, minimum price, maximum price, stock status.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if !criteria.search.is_empty() {
            pipeline = pipeline.add_filter(SearchFilter::new(&criteria.search));
        }
        if criteria.category != CategoryFilter::All {
            pipeline = pipeline.add_filter(CategoryFilterStage::new(criteria.category));
        }
        if let Some(min) = parse_bound(&criteria.min_price) {
            pipeline = pipeline.add_filter(MinPriceFilter::new(min));
        }
        if let Some(max) = parse_bound(&criteria.max_price) {
            pipeline = pipeline.add_filter(MaxPriceFilter::new(max));
        }
        if criteria.stock_status != StockFilter::All {
            pipeline = pipeline.add_filter(StockStatusFilter::new(criteria.stock_status));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ProductFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the stages in the order they run.
    pub fn stage_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all stages in sequence.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut current = products;
        for filter in &self.filters {
            let input = current.len();
            current = filter.apply(current);
            tracing::debug!(filter = filter.name(), input, output = current.len(), "Filter applied");
        }
        current
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    parse_leading_f64(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_default_criteria_builds_empty_pipeline() {
        assert!(FilterPipeline::from_criteria(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn test_stage_order() {
        let criteria = FilterCriteria::default()
            .with_stock_status(StockFilter::LowStock)
            .with_price_range("5", "10")
            .with_category(Category::Books)
            .with_search("rust");

        assert_eq!(
            FilterPipeline::from_criteria(&criteria).stage_names(),
            vec!["SearchFilter", "CategoryFilter", "MinPriceFilter", "MaxPriceFilter", "StockStatusFilter"]
        );
    }

    #[test]
    fn test_unparsable_bounds_are_skipped() {
        let criteria = FilterCriteria::default().with_price_range("abc", "");
        assert!(FilterPipeline::from_criteria(&criteria).is_empty());
    }
}
