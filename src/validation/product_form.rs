use super::number::parse_leading_f64;
use crate::model::{Category, ProductFormData};
use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use strum::{AsRefStr, Display};
use thiserror::Error;
use url::Url;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Notice shown alongside inline field errors.
pub const FORM_ERROR_NOTICE: &str = "Please fix the errors above before submitting.";

static PRICE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn price_pattern() -> &'static Regex {
    PRICE_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("price pattern is valid"))
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, Display, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    Name,
    Price,
    Category,
    StockQuantity,
    Description,
    ImageUrl,
}

/// A single field's validation failure. The `Display` text is the message shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Product name is required")]
    NameRequired,
    #[error("Product name must be at least 3 characters")]
    NameTooShort,
    #[error("Product name must not exceed 50 characters")]
    NameTooLong,
    #[error("Price is required")]
    PriceRequired,
    #[error("Price must be a positive number")]
    PriceNotPositive,
    #[error("Price must have at most 2 decimal places")]
    PriceTooPrecise,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Please select a valid category")]
    CategoryUnknown,
    #[error("Stock quantity is required")]
    StockRequired,
    #[error("Stock quantity must be a non-negative integer")]
    StockInvalid,
    #[error("Description must not exceed 200 characters")]
    DescriptionTooLong,
    #[error("Please enter a valid URL")]
    ImageUrlInvalid,
}

/// Mapping from field to its error. A field without an entry is valid.
///
/// Serializes as an object of field name to message, e.g. `{"price": "Price is required"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, FieldError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// The user-facing message for `field`, if it failed.
    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(field, error)| (field, error.to_string())))
    }
}

/// Outcome of [`validate_product_form`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: FormErrors,
}

/// Checks every field of a product form and reports all failures together.
pub fn validate_product_form(form: &ProductFormData) -> ValidationResult {
    let mut errors = FormErrors::default();

    if let Some(error) = check_name(&form.name) {
        errors.insert(FormField::Name, error);
    }
    if let Some(error) = check_price(&form.price) {
        errors.insert(FormField::Price, error);
    }
    if let Some(error) = check_category(&form.category) {
        errors.insert(FormField::Category, error);
    }
    if let Some(error) = check_stock_quantity(&form.stock_quantity) {
        errors.insert(FormField::StockQuantity, error);
    }
    if form.description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.insert(FormField::Description, FieldError::DescriptionTooLong);
    }
    if let Some(error) = check_image_url(&form.image_url) {
        errors.insert(FormField::ImageUrl, error);
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn check_name(name: &str) -> Option<FieldError> {
    let len = name.trim().chars().count();
    if len == 0 {
        Some(FieldError::NameRequired)
    } else if len < NAME_MIN_LEN {
        Some(FieldError::NameTooShort)
    } else if len > NAME_MAX_LEN {
        Some(FieldError::NameTooLong)
    } else {
        None
    }
}

fn check_price(price: &str) -> Option<FieldError> {
    if price.is_empty() {
        return Some(FieldError::PriceRequired);
    }
    match parse_leading_f64(price) {
        Some(value) if value > 0.0 => {
            (!price_pattern().is_match(price)).then_some(FieldError::PriceTooPrecise)
        }
        _ => Some(FieldError::PriceNotPositive),
    }
}

fn check_category(category: &str) -> Option<FieldError> {
    if category.is_empty() {
        Some(FieldError::CategoryRequired)
    } else if category.trim().parse::<Category>().is_err() {
        Some(FieldError::CategoryUnknown)
    } else {
        None
    }
}

fn check_stock_quantity(quantity: &str) -> Option<FieldError> {
    if quantity.is_empty() {
        Some(FieldError::StockRequired)
    } else if quantity.trim().parse::<u32>().is_err() {
        Some(FieldError::StockInvalid)
    } else {
        None
    }
}

fn check_image_url(image_url: &str) -> Option<FieldError> {
    let trimmed = image_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    Url::parse(trimmed).err().map(|_| FieldError::ImageUrlInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProductFormData {
        ProductFormData {
            name: "Test Product".into(),
            price: "29.99".into(),
            category: "Electronics".into(),
            stock_quantity: "10".into(),
            description: "Test description".into(),
            image_url: "https://example.com/image.jpg".into(),
        }
    }

    fn message(form: ProductFormData, field: FormField) -> Option<String> {
        let result = validate_product_form(&form);
        assert!(!result.is_valid);
        result.errors.message(field)
    }

    #[test]
    fn test_valid_form_passes() {
        let result = validate_product_form(&valid_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_optional_fields_pass() {
        let form = ProductFormData {
            description: String::new(),
            image_url: String::new(),
            ..valid_form()
        };
        assert!(validate_product_form(&form).is_valid);
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(
            message(ProductFormData { name: "".into(), ..valid_form() }, FormField::Name).as_deref(),
            Some("Product name is required")
        );
        assert_eq!(
            message(ProductFormData { name: "   ".into(), ..valid_form() }, FormField::Name).as_deref(),
            Some("Product name is required")
        );
        assert_eq!(
            message(ProductFormData { name: "ab".into(), ..valid_form() }, FormField::Name).as_deref(),
            Some("Product name must be at least 3 characters")
        );
        assert_eq!(
            message(ProductFormData { name: "a".repeat(51), ..valid_form() }, FormField::Name).as_deref(),
            Some("Product name must not exceed 50 characters")
        );
        let padded = format!("  {}  ", "a".repeat(50));
        assert!(validate_product_form(&ProductFormData { name: padded, ..valid_form() }).is_valid);
    }

    #[test]
    fn test_price_rules() {
        let cases = [
            ("", "Price is required"),
            ("-10", "Price must be a positive number"),
            ("0", "Price must be a positive number"),
            ("abc", "Price must be a positive number"),
            ("10.999", "Price must have at most 2 decimal places"),
            ("12abc", "Price must have at most 2 decimal places"),
            ("1e3", "Price must have at most 2 decimal places"),
        ];
        for (price, expected) in cases {
            let form = ProductFormData { price: price.into(), ..valid_form() };
            assert_eq!(message(form, FormField::Price).as_deref(), Some(expected), "price {price:?}");
        }

        for price in ["1", "0.5", "10.5", "10.99"] {
            let form = ProductFormData { price: price.into(), ..valid_form() };
            assert!(validate_product_form(&form).is_valid, "price {price:?}");
        }
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(
            message(ProductFormData { category: "".into(), ..valid_form() }, FormField::Category).as_deref(),
            Some("Category is required")
        );
        assert_eq!(
            message(ProductFormData { category: "Toys".into(), ..valid_form() }, FormField::Category).as_deref(),
            Some("Please select a valid category")
        );
    }

    #[test]
    fn test_stock_rules() {
        assert_eq!(
            message(ProductFormData { stock_quantity: "".into(), ..valid_form() }, FormField::StockQuantity)
                .as_deref(),
            Some("Stock quantity is required")
        );
        for quantity in ["-5", "abc", "5.5"] {
            let form = ProductFormData { stock_quantity: quantity.into(), ..valid_form() };
            assert_eq!(
                message(form, FormField::StockQuantity).as_deref(),
                Some("Stock quantity must be a non-negative integer"),
                "quantity {quantity:?}"
            );
        }
        let form = ProductFormData { stock_quantity: "0".into(), ..valid_form() };
        assert!(validate_product_form(&form).is_valid);
    }

    #[test]
    fn test_description_limit() {
        let form = ProductFormData { description: "a".repeat(201), ..valid_form() };
        assert_eq!(
            message(form, FormField::Description).as_deref(),
            Some("Description must not exceed 200 characters")
        );
        let form = ProductFormData { description: "a".repeat(200), ..valid_form() };
        assert!(validate_product_form(&form).is_valid);
    }

    #[test]
    fn test_image_url_rules() {
        assert_eq!(
            message(ProductFormData { image_url: "invalid-url".into(), ..valid_form() }, FormField::ImageUrl)
                .as_deref(),
            Some("Please enter a valid URL")
        );
        let form = ProductFormData { image_url: "ftp://files.example.com/a.png".into(), ..valid_form() };
        assert!(validate_product_form(&form).is_valid);
        let form = ProductFormData { image_url: "   ".into(), ..valid_form() };
        assert!(validate_product_form(&form).is_valid);
    }

    #[test]
    fn test_all_errors_reported_together() {
        let result = validate_product_form(&ProductFormData::default());

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
        assert_eq!(result.errors.get(FormField::Name), Some(&FieldError::NameRequired));
        assert_eq!(result.errors.get(FormField::Price), Some(&FieldError::PriceRequired));
        assert_eq!(result.errors.get(FormField::Category), Some(&FieldError::CategoryRequired));
        assert_eq!(result.errors.get(FormField::StockQuantity), Some(&FieldError::StockRequired));
        assert_eq!(result.errors.get(FormField::Description), None);
    }

    #[test]
    fn test_errors_serialize_as_messages() {
        let form = ProductFormData { name: "ab".into(), stock_quantity: "".into(), ..valid_form() };
        let value = serde_json::to_value(validate_product_form(&form)).unwrap();

        assert_eq!(value["isValid"], false);
        assert_eq!(value["errors"]["name"], "Product name must be at least 3 characters");
        assert_eq!(value["errors"]["stockQuantity"], "Stock quantity is required");
        assert!(value["errors"].get("price").is_none());
    }
}
