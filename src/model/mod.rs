//! Pure data structures: product records, form input, and filter criteria.

pub mod currency;
pub mod filters;
pub mod form;
pub mod product;

pub use currency::*;
pub use filters::*;
pub use form::*;
pub use product::*;
