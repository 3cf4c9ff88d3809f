use super::KvAdapter;
use crate::domain::background::settings::BackgroundSettings;

pub const BACKGROUND_KEY: &str = "backgroundSettings";

#[derive(Clone)]
pub struct BackgroundRepository {
    kv: KvAdapter,
}

impl BackgroundRepository {
    pub fn new(kv: KvAdapter) -> Self {
        Self { kv }
    }

    pub async fn get(&self) -> anyhow::Result<BackgroundSettings> {
        self.kv
            .get_or_else(BACKGROUND_KEY, BackgroundSettings::default)
            .await
    }

    pub async fn set(&self, settings: &BackgroundSettings) -> anyhow::Result<()> {
        self.kv.set(BACKGROUND_KEY, settings).await
    }
}
