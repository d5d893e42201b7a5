//! Persisted-blob behavior: wire format, write-through, reload equality,
//! seed fallback.

use jiff::civil::{Date, date};
use stocklist::{
    fixtures::seed_products,
    products::{Category, Product, ProductId},
    store::{MemoryStorage, RecordStore, STORAGE_KEY},
};
use testresult::TestResult;

const TODAY: Date = date(2025, 6, 15);

#[test]
fn storage_key_matches_the_original_blob_name() {
    assert_eq!(STORAGE_KEY, "products");
}

// A blob written by an earlier session must load unchanged.
#[test]
fn known_blob_shape_parses_field_for_field() -> TestResult {
    let blob = r#"[{
        "id": 1733980000000,
        "name": "Desk Lamp",
        "description": "Warm white lamp with a weighted base",
        "price": 120000,
        "category": "Household",
        "releaseDate": "2024-12-01",
        "stock": 40,
        "active": false
    }]"#;

    let store = RecordStore::load(MemoryStorage::with_blob(blob), TODAY);
    let record = store.records().first().ok_or("blob should hold one record")?;

    assert_eq!(record.id, ProductId(1_733_980_000_000));
    assert_eq!(record.name, "Desk Lamp");
    assert_eq!(record.category, Category::Household);
    assert_eq!(record.release_date, date(2024, 12, 1));
    assert_eq!(record.stock, 40);
    assert!(!record.active);

    Ok(())
}

#[test]
fn every_mutation_rewrites_the_whole_blob() -> TestResult {
    let backend = MemoryStorage::with_blob("[]");
    let mut store = RecordStore::load(backend.clone(), TODAY);

    let mut record = seed_products(TODAY)
        .into_iter()
        .next()
        .ok_or("seed should not be empty")?;
    record.id = ProductId(500);
    store.add(record.clone());

    let after_add = backend.blob().ok_or("add should have written a blob")?;
    assert!(after_add.contains("\"id\":500"), "blob was: {after_add}");

    record.stock = 1;
    store.update(record);

    let after_update: Vec<Product> =
        serde_json::from_str(&backend.blob().ok_or("update should have written a blob")?)?;
    assert_eq!(after_update.first().map(|r| r.stock), Some(1));

    store.remove(ProductId(500));

    let after_remove = backend.blob().ok_or("remove should have written a blob")?;
    assert_eq!(after_remove, "[]");

    Ok(())
}

#[test]
fn reload_reproduces_an_equal_collection() -> TestResult {
    let backend = MemoryStorage::default();
    let mut store = RecordStore::load(backend.clone(), TODAY);

    let mut extra = seed_products(TODAY)
        .into_iter()
        .next()
        .ok_or("seed should not be empty")?;
    extra.id = ProductId(900);
    extra.name = "Reload Check".to_string();
    store.add(extra);

    let blob = backend.blob().ok_or("add should have written a blob")?;
    let reloaded = RecordStore::load(MemoryStorage::with_blob(blob), TODAY);

    assert_eq!(reloaded.records(), store.records());

    Ok(())
}

#[test]
fn seed_fallback_applies_to_missing_and_garbage_blobs() {
    let from_missing = RecordStore::load(MemoryStorage::default(), TODAY);
    let from_garbage = RecordStore::load(MemoryStorage::with_blob("][ nope"), TODAY);

    assert_eq!(from_missing.records(), seed_products(TODAY).as_slice());
    assert_eq!(from_garbage.records(), from_missing.records());
}

// The seed fallback stays in memory until the first mutation; loading alone
// writes nothing back.
#[test]
fn load_does_not_write() {
    let backend = MemoryStorage::default();
    let store = RecordStore::load(backend.clone(), TODAY);

    assert_eq!(store.len(), 2);
    assert_eq!(backend.blob(), None);
}
