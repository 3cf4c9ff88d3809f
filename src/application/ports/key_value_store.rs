use async_trait::async_trait;

/// Key-value backend for persisted client settings. Values are JSON.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>>;
    async fn set(&self, key: &str, value: serde_json::Value) -> anyhow::Result<()>;
    fn backend_name(&self) -> &'static str;
}
