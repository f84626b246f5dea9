use catalog_dashboard::config::CatalogConfig;
use catalog_dashboard::lifecycle::CatalogSystem;
use catalog_dashboard::model::{Category, Product, ProductData};
use catalog_dashboard::storage::{
    Codec, FileStorage, JsonCodec, KeyValueStorage, MemoryStorage, PersistentStore, StorageError,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Stores pretty-printed JSON with a version prefix.
#[derive(Debug)]
struct VersionedCodec;

impl Codec for VersionedCodec {
    fn encode<T: Serialize>(&self, key: &str, value: &T) -> Result<String, StorageError> {
        let body = serde_json::to_string_pretty(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(format!("v1:{body}"))
    }

    fn decode<T: DeserializeOwned>(&self, key: &str, raw: &str) -> Result<T, StorageError> {
        let body = raw.strip_prefix("v1:").ok_or_else(|| StorageError::Deserialize {
            key: key.to_string(),
            message: "missing version prefix".into(),
        })?;
        JsonCodec.decode(key, body)
    }
}

fn recording_store<S: KeyValueStorage>(backend: S) -> (PersistentStore<S>, Arc<Mutex<Vec<String>>>) {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = errors.clone();
    let store = PersistentStore::new(backend).on_error(move |e| {
        sink.lock().unwrap().push(e.to_string());
    });
    (store, errors)
}

#[test]
fn test_round_trip_with_custom_codec() {
    let storage = MemoryStorage::new();
    let store = PersistentStore::new(storage.clone()).with_codec(VersionedCodec);

    assert!(store.save("numbers", &vec![1, 2, 3]));
    assert!(storage.raw("numbers").unwrap().starts_with("v1:"));
    assert_eq!(store.load("numbers", Vec::<i32>::new()), vec![1, 2, 3]);

    // Data written by another codec is unreadable here and falls back to the default.
    storage.set_item("numbers", "[1,2,3]").unwrap();
    assert_eq!(store.load("numbers", vec![0]), vec![0]);
}

#[test]
fn test_write_failure_reports_and_keeps_previous_value() {
    let storage = MemoryStorage::with_quota(40);
    let (store, errors) = recording_store(storage.clone());

    assert!(store.save("k", &"short"));
    assert!(!store.save("k", &"a value far too long to fit in the configured quota"));

    assert_eq!(store.load("k", String::new()), "short");
    let errors = errors.lock().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Storage quota exceeded"));
}

#[test]
fn test_remove_restores_default() {
    let (store, errors) = recording_store(MemoryStorage::new());

    store.save("theme", &"dark");
    store.remove("theme");
    store.remove("theme");

    assert_eq!(store.load("theme", "light".to_string()), "light");
    assert!(errors.lock().unwrap().is_empty());
}

#[test]
fn test_products_round_trip_through_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let products = vec![
        Product::new("1", ProductData::new("Desk Lamp", 39.99, Category::Home, 12)),
        Product::new(
            "2",
            ProductData::new("Mystery Novel", 12.5, Category::Books, 0)
                .with_description("A page-turner")
                .with_image_url("https://example.com/novel.jpg"),
        ),
    ];

    let writer = PersistentStore::new(FileStorage::new(dir.path()));
    assert!(writer.save("ecommerce-products", &products));

    let raw = std::fs::read_to_string(dir.path().join("ecommerce-products.json")).unwrap();
    assert!(raw.contains("\"stockQuantity\":12"));
    assert!(raw.contains("\"imageUrl\":\"https://example.com/novel.jpg\""));
    assert!(raw.contains("\"createdAt\""));

    let reader = PersistentStore::new(FileStorage::new(dir.path()));
    let loaded: Vec<Product> = reader.load("ecommerce-products", Vec::new());
    assert_eq!(loaded, products);
}

#[tokio::test]
async fn test_catalog_system_uses_storage_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = CatalogConfig {
        storage_dir: Some(dir.path().to_path_buf()),
        ..CatalogConfig::default()
    };

    let system = CatalogSystem::new(&config);
    let product = system
        .client
        .add_product(ProductData::new("Yoga Mat", 25.0, Category::Sports, 8))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let system = CatalogSystem::new(&config);
    let reloaded = system.client.get(product.id()).await.unwrap();
    assert_eq!(reloaded, Some(product));
    system.shutdown().await.unwrap();
}
