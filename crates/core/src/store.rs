//! Record storage.
//!
//! The catalog lives in memory, newest record first, and mirrors itself into
//! a single named blob after every mutation. The blob is a best-effort
//! mirror: an unreadable blob falls back to the seed set at load time, and a
//! failed write is logged at `warn` and otherwise ignored; the in-memory
//! collection stays the source of truth for the rest of the session.

use std::sync::{Arc, Mutex, PoisonError};

use jiff::civil::Date;
use thiserror::Error;

use crate::{
    fixtures,
    products::{Product, ProductId},
};

/// Name of the persisted blob holding the serialized catalog.
pub const STORAGE_KEY: &str = "products";

/// A named blob the catalog is mirrored into.
pub trait StorageBackend {
    /// Read the whole blob; `None` when it does not exist.
    fn read(&self) -> Option<String>;

    /// Replace the blob wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage rejects the write.
    fn write(&self, blob: &str) -> Result<(), StorageError>;
}

/// Storage backend failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the write (quota, storage disabled, ...).
    #[error("storage rejected the write: {0}")]
    WriteRejected(String),
}

/// In-memory [`StorageBackend`], used by tests and as the non-browser
/// stand-in. Clones share the same blob, so a test can keep a handle and
/// observe what the store writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Backend pre-seeded with an existing blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Arc::new(Mutex::new(Some(blob.into()))),
        }
    }

    /// Current blob contents.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        self.blob
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.blob()
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.to_string());

        Ok(())
    }
}

/// Ordered product collection backed by a [`StorageBackend`].
#[derive(Debug)]
pub struct RecordStore<B> {
    backend: B,
    records: Vec<Product>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load the catalog from the backend, falling back to
    /// [`fixtures::seed_products`] dated `today` when the blob is missing or
    /// unreadable.
    #[must_use]
    pub fn load(backend: B, today: Date) -> Self {
        let records = match backend.read() {
            Some(blob) => match serde_json::from_str::<Vec<Product>>(&blob) {
                Ok(records) => records,
                Err(error) => {
                    tracing::warn!(%error, "stored catalog is unreadable, starting from seed data");
                    fixtures::seed_products(today)
                }
            },
            None => fixtures::seed_products(today),
        };

        Self { backend, records }
    }

    /// All records, newest first.
    #[must_use]
    pub fn records(&self) -> &[Product] {
        &self.records
    }

    /// Look up one record by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A fresh id no existing record uses, at least `seed`.
    #[must_use]
    pub fn allocate_id(&self, seed: i64) -> ProductId {
        let mut candidate = seed;
        while self.records.iter().any(|record| record.id.0 == candidate) {
            candidate = candidate.saturating_add(1);
        }

        ProductId(candidate)
    }

    /// Prepend a record and rewrite the blob.
    pub fn add(&mut self, record: Product) {
        self.records.insert(0, record);
        self.persist();
    }

    /// Replace the record carrying `record.id`, keeping its position, and
    /// rewrite the blob. Returns `false` when no record has that id.
    pub fn update(&mut self, record: Product) -> bool {
        let Some(slot) = self
            .records
            .iter_mut()
            .find(|existing| existing.id == record.id)
        else {
            return false;
        };

        *slot = record;
        self.persist();

        true
    }

    /// Remove the record with `id` and rewrite the blob. Returns the removed
    /// record, `None` when absent.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.records.iter().position(|record| record.id == id)?;
        let removed = self.records.remove(index);
        self.persist();

        Some(removed)
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(&self.records) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize catalog, skipping persistence");
                return;
            }
        };

        if let Err(error) = self.backend.write(&blob) {
            tracing::warn!(%error, "failed to persist catalog");
        }
    }
}
