//! Filter criteria chosen by the user to narrow the displayed product list.

use super::product::Category;
use crate::validation::{validate_price_range, PriceRangeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The user-chosen predicate narrowing the displayed product set.
///
/// Every field is applied independently and combined with logical AND.
/// `min_price` and `max_price` hold the raw text of the inputs; an empty
/// string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    pub min_price: String,
    pub max_price: String,
    pub stock_status: StockFilter,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_price_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_price = min.into();
        self.max_price = max.into();
        self
    }

    pub fn with_stock_status(mut self, stock_status: StockFilter) -> Self {
        self.stock_status = stock_status;
        self
    }

    /// True when any criterion differs from its default.
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != CategoryFilter::All
            || !self.min_price.is_empty()
            || !self.max_price.is_empty()
            || self.stock_status != StockFilter::All
    }

    /// Checks the price bounds for display next to the inputs.
    pub fn price_range(&self) -> Result<(), PriceRangeError> {
        validate_price_range(&self.min_price, &self.max_price)
    }
}

/// Category criterion: a single category, or every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.to_string()
    }
}

/// Stock status criterion.
///
/// Note that `InStock` keeps every product with a positive quantity, low stock included.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum StockFilter {
    #[default]
    All,
    #[serde(rename = "In Stock")]
    #[strum(serialize = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    #[strum(serialize = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    #[strum(serialize = "Low Stock")]
    LowStock,
}

impl StockFilter {
    pub fn matches(&self, stock_quantity: u32) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => stock_quantity > 0,
            StockFilter::OutOfStock => stock_quantity == 0,
            StockFilter::LowStock => stock_quantity > 0 && stock_quantity < super::LOW_STOCK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_filters() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.has_active_filters());
        assert_eq!(criteria.category, CategoryFilter::All);
        assert_eq!(criteria.stock_status, StockFilter::All);
    }

    #[test]
    fn test_any_field_activates() {
        assert!(FilterCriteria::default().with_search("lap").has_active_filters());
        assert!(FilterCriteria::default().with_category(Category::Books).has_active_filters());
        assert!(FilterCriteria::default().with_price_range("10", "").has_active_filters());
        assert!(FilterCriteria::default().with_price_range("", "10").has_active_filters());
        assert!(FilterCriteria::default()
            .with_stock_status(StockFilter::LowStock)
            .has_active_filters());
    }

    #[test]
    fn test_json_uses_display_strings() {
        let criteria = FilterCriteria::default()
            .with_category(Category::Home)
            .with_stock_status(StockFilter::OutOfStock);
        let value = serde_json::to_value(&criteria).unwrap();

        assert_eq!(value["category"], "Home");
        assert_eq!(value["stockStatus"], "Out of Stock");
        assert_eq!(value["minPrice"], "");

        let parsed: FilterCriteria =
            serde_json::from_str(r#"{"search":"x","category":"All","stockStatus":"Low Stock"}"#).unwrap();
        assert_eq!(parsed.category, CategoryFilter::All);
        assert_eq!(parsed.stock_status, StockFilter::LowStock);
        assert_eq!(parsed.max_price, "");
    }

    #[test]
    fn test_price_range_check() {
        assert_eq!(FilterCriteria::default().price_range(), Ok(()));
        assert_eq!(FilterCriteria::default().with_price_range("10", "20").price_range(), Ok(()));
        assert_eq!(
            FilterCriteria::default().with_price_range("x", "").price_range(),
            Err(PriceRangeError::InvalidMinimum)
        );
        assert_eq!(
            FilterCriteria::default().with_price_range("", "-1").price_range(),
            Err(PriceRangeError::InvalidMaximum)
        );
        assert_eq!(
            FilterCriteria::default().with_price_range("50", "20").price_range(),
            Err(PriceRangeError::MinimumExceedsMaximum)
        );
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Other));
        assert!(CategoryFilter::Only(Category::Home).matches(Category::Home));
        assert!(!CategoryFilter::Only(Category::Home).matches(Category::Books));
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("Toys".parse::<CategoryFilter>().is_err());
        assert_eq!("Sports".parse::<CategoryFilter>().unwrap(), CategoryFilter::Only(Category::Sports));
    }

    #[test]
    fn test_stock_filter_matches() {
        assert!(StockFilter::InStock.matches(1));
        assert!(StockFilter::InStock.matches(50));
        assert!(!StockFilter::InStock.matches(0));
        assert!(StockFilter::OutOfStock.matches(0));
        assert!(StockFilter::LowStock.matches(4));
        assert!(!StockFilter::LowStock.matches(5));
        assert!(!StockFilter::LowStock.matches(0));
        assert!(StockFilter::All.matches(0));
    }
}
