use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Quantity below which a product that is still in stock counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Represents a product in the catalog.
///
/// # Catalog
/// Products are owned by the [`CatalogActor`](crate::catalog::CatalogActor).
/// They are created from a validated [`ProductData`] payload and are only ever
/// changed by full-record replacement through [`Product::replace`].
///
/// The identifier is assigned once at construction and has no setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: String,
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product with the given identifier, stamped with the current time.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically produced by the catalog's id generator)
    /// * `data` - The record's field values
    pub fn new(id: impl Into<String>, data: ProductData) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: data.name,
            price: data.price,
            category: data.category,
            stock_quantity: data.stock_quantity,
            description: data.description,
            image_url: data.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replaces every field except `id` and `created_at`, refreshing `updated_at`.
    pub fn replace(&mut self, data: ProductData) {
        self.name = data.name;
        self.price = data.price;
        self.category = data.category;
        self.stock_quantity = data.stock_quantity;
        self.description = data.description;
        self.image_url = data.image_url;
        self.updated_at = Utc::now();
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock_quantity)
    }

    /// Returns the field values of this record without identity or timestamps.
    pub fn data(&self) -> ProductData {
        ProductData {
            name: self.name.clone(),
            price: self.price,
            category: self.category,
            stock_quantity: self.stock_quantity,
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Payload for creating a product or replacing an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub price: f64,
    pub category: Category,
    pub stock_quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ProductData {
    /// Builds a payload with the required fields and no description or image.
    pub fn new(name: impl Into<String>, price: f64, category: Category, stock_quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            category,
            stock_quantity,
            description: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Catalog categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    Other,
}

/// Stock status class derived from a stock quantity.
///
/// Out of stock takes precedence over low stock, which takes precedence over in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
pub enum StockStatus {
    #[serde(rename = "Out of Stock")]
    #[strum(serialize = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    #[strum(serialize = "Low Stock")]
    LowStock,
    #[serde(rename = "In Stock")]
    #[strum(serialize = "In Stock")]
    InStock,
}

impl StockStatus {
    pub fn classify(stock_quantity: u32) -> Self {
        match stock_quantity {
            0 => StockStatus::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn sample() -> ProductData {
        ProductData::new("Laptop", 999.99, Category::Electronics, 10).with_description("Fast machine")
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(4), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(5), StockStatus::InStock);
        assert_eq!(StockStatus::classify(u32::MAX), StockStatus::InStock);
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut product = Product::new("p1", sample());
        let created_at = product.created_at;

        product.replace(ProductData::new("Desktop", 1500.0, Category::Electronics, 0));

        assert_eq!(product.id(), "p1");
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
        assert_eq!(product.name, "Desktop");
        assert_eq!(product.description, None);
        assert_eq!(product.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_json_layout_is_camel_case() {
        let product = Product::new("p1", sample());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], "p1");
        assert_eq!(value["stockQuantity"], 10);
        assert_eq!(value["category"], "Electronics");
        assert!(value["createdAt"].is_string());
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_category_string_forms() {
        for category in Category::iter() {
            assert_eq!(Category::from_str(category.as_ref()).unwrap(), category);
        }
        assert!(Category::from_str("Toys").is_err());
        assert_eq!(StockStatus::LowStock.to_string(), "Low Stock");
    }
}
