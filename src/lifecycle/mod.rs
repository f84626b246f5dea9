//! Startup and shutdown of the catalog, and tracing setup.

mod catalog_system;
pub mod tracing;

pub use self::catalog_system::CatalogSystem;
pub use self::tracing::setup_tracing;
