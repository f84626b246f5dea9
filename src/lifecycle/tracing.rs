//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter for the
//! whole process. The filter comes from `RUST_LOG` when it is set, otherwise
//! from the configured `log_level`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup (with the number of loaded products) and shutdown
//! - **Catalog actions**: Add, Update, Delete, selection and filter changes
//! - **Client calls**: `#[instrument]` spans around each client method
//! - **Storage failures**: `warn!` with the key and operation
//! - **Filtering**: `debug!` per pipeline stage with before/after counts
//!
//! ## Usage Examples
//!
//! ```bash
//! # Defaults to the configured level (info)
//! cargo run
//!
//! # Show payloads and per-stage filter counts
//! RUST_LOG=debug cargo run
//!
//! # Only the filter pipeline
//! RUST_LOG=catalog_dashboard::filter=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug`, adding a product looks like:
//!
//! ```text
//! DEBUG add_product: add_product called data=ProductData { name: "Desk Lamp", ... }
//! DEBUG Add data=ProductData { name: "Desk Lamp", ... }
//! DEBUG Saved key="ecommerce-products"
//! INFO Added id="6f1c..." size=1
//! INFO Product added successfully! kind=success
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Later calls are ignored.
pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths
        .compact()
        .try_init();
}
