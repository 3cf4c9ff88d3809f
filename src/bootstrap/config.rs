use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::Context;

pub const DEV_API_KEY: &str = "dev-api-key-change-me";
pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_API_VERSION: &str = "2022-06-28";

#[derive(Clone)]
pub struct Config {
    pub api_port: u16,
    pub api_key: String,
    pub notion: NotionConfig,
    pub is_production: bool,
}

#[derive(Clone)]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
    pub base_url: String,
    pub api_version: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_port = non_empty("API_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8787);
        let api_key = non_empty("API_KEY").context("API_KEY must be set")?;
        let token = non_empty("NOTION_TOKEN").context("NOTION_TOKEN must be set")?;
        let database_id =
            non_empty("NOTION_DATABASE_ID").context("NOTION_DATABASE_ID must be set")?;
        let base_url = non_empty("NOTION_BASE_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_NOTION_BASE_URL.into());
        let is_production = matches!(
            lookup("RUST_ENV").as_deref(),
            Some("production") | Some("prod")
        );

        if is_production && (api_key == DEV_API_KEY || api_key.len() < 16) {
            anyhow::bail!("API_KEY must be set to a strong secret in production");
        }

        Ok(Self {
            api_port,
            api_key,
            notion: NotionConfig {
                token,
                database_id,
                base_url,
                api_version: NOTION_API_VERSION.into(),
            },
            is_production,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_port", &self.api_port)
            .field("api_key", &"<redacted>")
            .field("notion", &self.notion)
            .field("is_production", &self.is_production)
            .finish()
    }
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Settings for the new-tab side: where the proxy lives and where settings
/// are persisted. Without a storage path the in-memory backend is used.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_key: String,
    pub storage_path: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let api_url = non_empty("TABHOME_API_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| "http://localhost:8787".into());
        let api_key = non_empty("TABHOME_API_KEY").unwrap_or_else(|| DEV_API_KEY.into());
        let storage_path = non_empty("TABHOME_STORAGE_PATH").map(PathBuf::from);
        Self {
            api_url,
            api_key,
            storage_path,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("storage_path", &self.storage_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_and_required_values() {
        let cfg = Config::from_lookup(lookup(&[
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_DATABASE_ID", "db1"),
            ("API_KEY", "local-key"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_port, 8787);
        assert_eq!(cfg.api_key, "local-key");
        assert_eq!(cfg.notion.base_url, DEFAULT_NOTION_BASE_URL);
        assert_eq!(cfg.notion.api_version, "2022-06-28");
        assert!(!cfg.is_production);

        let err = Config::from_lookup(lookup(&[("NOTION_DATABASE_ID", "db1")])).unwrap_err();
        assert!(err.to_string().contains("NOTION_TOKEN"));
    }

    #[test]
    fn api_key_is_required() {
        let err = Config::from_lookup(lookup(&[
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_DATABASE_ID", "db1"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("API_KEY"));

        let blank = Config::from_lookup(lookup(&[
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_DATABASE_ID", "db1"),
            ("API_KEY", "   "),
        ]));
        assert!(blank.is_err());
    }

    #[test]
    fn production_rejects_dev_key() {
        let base = [
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_DATABASE_ID", "db1"),
            ("RUST_ENV", "production"),
        ];
        let mut dev = base.to_vec();
        dev.push(("API_KEY", DEV_API_KEY));
        assert!(Config::from_lookup(lookup(&dev)).is_err());

        let mut short = base.to_vec();
        short.push(("API_KEY", "short"));
        assert!(Config::from_lookup(lookup(&short)).is_err());

        let mut strong = base.to_vec();
        strong.push(("API_KEY", "a-long-enough-shared-secret"));
        let cfg = Config::from_lookup(lookup(&strong)).unwrap();
        assert!(cfg.is_production);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let cfg = Config::from_lookup(lookup(&[
            ("NOTION_TOKEN", "secret_abc"),
            ("NOTION_DATABASE_ID", "db1"),
            ("API_KEY", "shared-key-value"),
        ]))
        .unwrap();
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("secret_abc"));
        assert!(!printed.contains("shared-key-value"));
        assert!(printed.contains("db1"));
    }

    #[test]
    fn client_config_trims_url() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("TABHOME_API_URL", "https://proxy.example.workers.dev/"),
            ("TABHOME_STORAGE_PATH", "/tmp/tabhome.json"),
        ]));
        assert_eq!(cfg.api_url, "https://proxy.example.workers.dev");
        assert_eq!(cfg.api_key, DEV_API_KEY);
        assert_eq!(cfg.storage_path, Some(PathBuf::from("/tmp/tabhome.json")));

        let defaults = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(defaults.api_url, "http://localhost:8787");
        assert!(defaults.storage_path.is_none());
    }
}
