use std::path::Path;
use std::sync::Arc;

use crate::application::ports::key_value_store::KeyValueStore;

pub mod file_store;
pub mod memory_store;

/// Picks the settings backend once at startup: the durable file store when a
/// path is configured, otherwise the in-process fallback.
pub fn select_store(path: Option<&Path>) -> Arc<dyn KeyValueStore> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "settings_store_file");
            Arc::new(file_store::FileStore::new(path))
        }
        None => {
            tracing::info!("settings_store_memory_fallback");
            Arc::new(memory_store::MemoryStore::default())
        }
    }
}
