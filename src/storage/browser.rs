//! localStorage-backed store for wasm builds.

use web_sys::{Storage, Window};

use super::KeyValueStore;

fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Store over the browser profile's localStorage. Stateless; every call
/// resolves the storage object anew so a revoked storage area degrades to
/// empty-store reads instead of panics.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl BrowserStore {
    pub fn new() -> Self {
        BrowserStore
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match local_storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                tracing::warn!(error = %err, "localStorage unavailable");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Ok(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "failed to persist slot");
                }
            }
            Err(err) => tracing::warn!(error = %err, "localStorage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        match local_storage() {
            Ok(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!(key, "failed to remove slot");
                }
            }
            Err(err) => tracing::warn!(error = %err, "localStorage unavailable"),
        }
    }
}
