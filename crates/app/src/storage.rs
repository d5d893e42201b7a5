//! Catalog persistence through the browser's local storage.

use stocklist::store::{STORAGE_KEY, StorageBackend, StorageError};

/// [`StorageBackend`] over `window.localStorage`, keyed by
/// [`STORAGE_KEY`]. Off wasm32 (host tests, tooling builds) it degrades to a
/// shared in-memory blob so the rest of the crate behaves identically.
#[derive(Debug, Default, Clone)]
pub struct BrowserStorage {
    #[cfg(not(target_arch = "wasm32"))]
    fallback: stocklist::store::MemoryStorage,
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn read(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;

        storage.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
            .ok_or_else(|| {
                StorageError::WriteRejected("local storage is unavailable".to_string())
            })?;

        storage.set_item(STORAGE_KEY, blob).map_err(|_err| {
            StorageError::WriteRejected("local storage refused the write".to_string())
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for BrowserStorage {
    fn read(&self) -> Option<String> {
        self.fallback.read()
    }

    fn write(&self, blob: &str) -> Result<(), StorageError> {
        self.fallback.write(blob)
    }
}
