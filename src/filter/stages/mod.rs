//! Stage implementations for the product filter pipeline.
//!
//! Each stage handles one field of [`FilterCriteria`](crate::model::FilterCriteria).

pub mod category;
pub mod price;
pub mod search;
pub mod stock;

pub use category::CategoryFilterStage;
pub use price::{MaxPriceFilter, MinPriceFilter};
pub use search::SearchFilter;
pub use stock::StockStatusFilter;
