use super::product::{Category, Product, ProductData};
use crate::validation::{parse_leading_f64, validate_product_form, FormErrors};
use serde::{Deserialize, Serialize};

/// Raw text of the product form, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFormData {
    pub name: String,
    pub price: String,
    pub category: String,
    pub stock_quantity: String,
    pub description: String,
    pub image_url: String,
}

impl ProductFormData {
    /// Validates the form and converts it into a [`ProductData`] payload.
    ///
    /// Text fields are trimmed; an empty description or image URL becomes `None`.
    pub fn into_product_data(self) -> Result<ProductData, FormErrors> {
        let result = validate_product_form(&self);
        if !result.is_valid {
            return Err(result.errors);
        }

        // The validator has already accepted every field below.
        let price = parse_leading_f64(&self.price).unwrap_or_default();
        let category = self.category.trim().parse::<Category>().unwrap_or(Category::Other);
        let stock_quantity = self.stock_quantity.trim().parse::<u32>().unwrap_or_default();

        Ok(ProductData {
            name: self.name.trim().to_string(),
            price,
            category,
            stock_quantity,
            description: non_blank(&self.description),
            image_url: non_blank(&self.image_url),
        })
    }
}

impl From<&Product> for ProductFormData {
    /// Pre-fills the form for editing an existing product.
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.to_string(),
            stock_quantity: product.stock_quantity.to_string(),
            description: product.description.clone().unwrap_or_default(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
