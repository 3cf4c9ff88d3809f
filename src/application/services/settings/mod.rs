//! Persisted client settings: quick links and the page background.
//!
//! Both repositories sit on [`KvAdapter`], a typed wrapper over whichever
//! [`KeyValueStore`] was selected at startup. Every write replaces the whole
//! record; the last writer wins.

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::key_value_store::KeyValueStore;

pub mod background;
pub mod quick_links;

#[derive(Clone)]
pub struct KvAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl KvAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// Stored value for `key`, or `default()` when absent or null.
    pub async fn get_or_else<T, F>(&self, key: &str, default: F) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.store.get(key).await? {
            Some(serde_json::Value::Null) | None => Ok(default()),
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("decode stored value for `{key}`")),
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_value(value)
            .with_context(|| format!("encode value for `{key}`"))?;
        self.store.set(key, json).await
    }
}
