//! Validation of product form input and price range filters.
//!
//! All functions here are pure. Product form checks collect every failing field
//! instead of stopping at the first one, so the form can show all errors at once.

mod number;
mod price_range;
mod product_form;

pub use number::parse_leading_f64;
pub use price_range::*;
pub use product_form::*;
