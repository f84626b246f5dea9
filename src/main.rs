//! # Catalog Dashboard demo
//!
//! Drives the catalog the way the dashboard screen would:
//! 1. Start the [`CatalogSystem`] from configuration.
//! 2. Submit a few product forms (one of them invalid).
//! 3. Search, filter, select, and bulk-delete.

use catalog_dashboard::config::load_config;
use catalog_dashboard::lifecycle::{setup_tracing, CatalogSystem};
use catalog_dashboard::model::{format_currency, Category, FilterCriteria, ProductFormData, StockFilter};
use tracing::{error, info, warn, Instrument};

fn form(name: &str, price: &str, category: Category, stock: &str) -> ProductFormData {
    ProductFormData {
        name: name.to_string(),
        price: price.to_string(),
        category: category.to_string(),
        stock_quantity: stock.to_string(),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = load_config().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!(key = %config.storage_key, "Starting catalog dashboard");
    let system = CatalogSystem::new(&config);
    let client = system.client.clone();

    let span = tracing::info_span!("product_entry");
    async {
        let forms = [
            form("Wireless Mouse", "24.99", Category::Electronics, "12"),
            form("Trail Running Shoes", "89.50", Category::Sports, "3"),
            form("Cookbook", "15", Category::Books, "0"),
            form("X", "-4", Category::Other, "two"),
        ];
        for product_form in forms {
            match client.submit_form(product_form, None).await {
                Ok(product) => info!(
                    id = %product.id(),
                    price = %format_currency(product.price),
                    status = %product.stock_status(),
                    "Product saved"
                ),
                Err(e) => warn!(error = %e, "Form rejected"),
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("browsing");
    async {
        client
            .set_filters(FilterCriteria::default().with_stock_status(StockFilter::InStock))
            .await
            .map_err(|e| e.to_string())?;
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        info!(summary = %snapshot.summary(), "In-stock filter applied");

        client
            .set_filters(FilterCriteria::default().with_search("shoes"))
            .await
            .map_err(|e| e.to_string())?;
        tokio::time::sleep(config.search_debounce()).await;
        let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
        info!(summary = %snapshot.summary(), "Search applied");

        for product in &snapshot.filtered {
            client
                .toggle_selection(product.id())
                .await
                .map_err(|e| e.to_string())?;
        }
        client.clear_filters().await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    match client.delete_selected().await {
        Ok(removed) => info!(count = removed.len(), "Selection deleted"),
        Err(e) => error!(error = %e, "Bulk delete failed"),
    }

    let snapshot = client.snapshot().await.map_err(|e| e.to_string())?;
    info!(total = snapshot.total(), "Catalog contents");

    drop(client);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
