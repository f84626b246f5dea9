#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Catalog Dashboard
//!
//! > **The core of a product catalog dashboard: validation, filtering, and persistence.**
//!
//! A dashboard lets a user add, edit, delete, and bulk-delete products, and
//! narrow the list with a search box and filters. This crate is everything
//! behind that screen except the rendering.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner for the collection
//! The product collection lives inside a single actor task ([`catalog::CatalogActor`]).
//! Everything else talks to it through a cloneable [`catalog::CatalogClient`] using
//! named actions (add, update, delete, set filters, ...). There is no shared
//! mutable state and no locks around the products.
//!
//! ### Pure derivations
//! Validation and filtering are plain functions over borrowed data. The actor calls
//! [`filter::filter_products`] again whenever the collection or the filters change.
//!
//! ### Failures that don't stop the user
//! Storage failures never surface as errors. Reads fall back to an empty
//! collection and writes leave the in-memory state untouched; the user gets an
//! error notification instead.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`Product`](model::Product), [`ProductData`](model::ProductData),
//! [`FilterCriteria`](model::FilterCriteria), and the raw
//! [`ProductFormData`](model::ProductFormData) as typed by the user.
//!
//! ### 2. The Rules ([`validation`])
//! [`validate_product_form`](validation::validate_product_form) returns every failing
//! field with its message; [`validate_price_range`](validation::validate_price_range)
//! checks the filter's price bounds.
//!
//! ### 3. The View ([`filter`])
//! A [`FilterPipeline`](filter::FilterPipeline) of independent stages (search,
//! category, price, stock), combined with AND.
//!
//! ### 4. The Memory ([`storage`])
//! [`PersistentStore`](storage::PersistentStore) maps a key to a JSON value in a
//! [`KeyValueStorage`](storage::KeyValueStorage) backend (in memory or on disk).
//!
//! ### 5. The State ([`catalog`]) and the Orchestrator ([`lifecycle`])
//! The actor, its client, and [`CatalogSystem`](lifecycle::CatalogSystem), which
//! starts and stops it. See [`lifecycle::tracing`] for logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! cargo run
//!
//! # Keep products between runs
//! CATALOG__STORAGE_DIR=./data cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod catalog;
pub mod config;
pub mod filter;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod storage;
pub mod validation;
