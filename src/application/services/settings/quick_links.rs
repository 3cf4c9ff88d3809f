use chrono::Utc;

use super::KvAdapter;
use crate::domain::links::favicon::is_valid_url;
use crate::domain::links::quick_link::{NewQuickLink, QuickLink, QuickLinkPatch, default_links};

pub const QUICK_LINKS_KEY: &str = "quickLinks";

#[derive(thiserror::Error, Debug)]
pub enum LinkError {
    #[error("quick link `{0}` not found")]
    NotFound(String),
    #[error("index {index} out of range for {len} links")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("name is required")]
    InvalidName,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Ordered list of quick links. Each operation loads the full list, edits it
/// and writes it back; array order is the display order.
#[derive(Clone)]
pub struct QuickLinkRepository {
    kv: KvAdapter,
}

impl QuickLinkRepository {
    pub fn new(kv: KvAdapter) -> Self {
        Self { kv }
    }

    pub async fn list(&self) -> Result<Vec<QuickLink>, LinkError> {
        let links = self
            .kv
            .get_or_else(QUICK_LINKS_KEY, || {
                default_links(Utc::now().timestamp_millis())
            })
            .await?;
        Ok(links)
    }

    async fn save(&self, links: &[QuickLink]) -> Result<(), LinkError> {
        self.kv.set(QUICK_LINKS_KEY, links).await?;
        Ok(())
    }

    pub async fn add(&self, new: NewQuickLink) -> Result<QuickLink, LinkError> {
        let new = NewQuickLink {
            name: validate_name(&new.name)?,
            url: validate_url(&new.url)?,
            color: new.color,
        };
        let mut links = self.list().await?;
        let link = QuickLink::create(new, Utc::now().timestamp_millis());
        links.push(link.clone());
        self.save(&links).await?;
        tracing::debug!(id = %link.id, "quick_link_added");
        Ok(link)
    }

    pub async fn update(&self, id: &str, patch: QuickLinkPatch) -> Result<QuickLink, LinkError> {
        let patch = QuickLinkPatch {
            name: patch.name.as_deref().map(validate_name).transpose()?,
            url: patch.url.as_deref().map(validate_url).transpose()?,
            color: patch.color,
        };
        let mut links = self.list().await?;
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LinkError::NotFound(id.to_string()))?;
        link.apply(patch);
        let updated = link.clone();
        self.save(&links).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<(), LinkError> {
        let mut links = self.list().await?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Err(LinkError::NotFound(id.to_string()));
        }
        self.save(&links).await
    }

    /// Moves the link at `from` so it ends up at index `to`.
    pub async fn reorder(&self, from: usize, to: usize) -> Result<Vec<QuickLink>, LinkError> {
        let mut links = self.list().await?;
        let len = links.len();
        for index in [from, to] {
            if index >= len {
                return Err(LinkError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(links);
        }
        let moved = links.remove(from);
        links.insert(to, moved);
        self.save(&links).await?;
        Ok(links)
    }
}

fn validate_name(name: &str) -> Result<String, LinkError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LinkError::InvalidName);
    }
    Ok(name.to_string())
}

fn validate_url(url: &str) -> Result<String, LinkError> {
    if !is_valid_url(url) {
        return Err(LinkError::InvalidUrl(url.to_string()));
    }
    Ok(url.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::ports::key_value_store::KeyValueStore;
    use crate::domain::links::color::LinkColor;
    use crate::infrastructure::storage::memory_store::MemoryStore;

    fn repo() -> (QuickLinkRepository, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (QuickLinkRepository::new(KvAdapter::new(store.clone())), store)
    }

    fn ids(links: &[QuickLink]) -> Vec<String> {
        links.iter().map(|l| l.id.clone()).collect()
    }

    fn new_link(name: &str, url: &str) -> NewQuickLink {
        NewQuickLink {
            name: name.into(),
            url: url.into(),
            color: LinkColor::Teal,
        }
    }

    #[tokio::test]
    async fn first_use_returns_defaults_without_writing() {
        let (repo, store) = repo();
        let links = repo.list().await.unwrap();
        assert_eq!(ids(&links), ["1", "2", "3", "4"]);
        assert_eq!(links[1].name, "Claude");
        assert!(store.get(QUICK_LINKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_appends_and_derives_fields() {
        let (repo, store) = repo();
        let link = repo
            .add(new_link("  Docs ", "https://docs.rs/axum"))
            .await
            .unwrap();
        assert_eq!(link.name, "Docs");
        assert_eq!(
            link.favicon_url,
            "https://www.google.com/s2/favicons?domain=docs.rs&sz=64"
        );
        assert!(link.created_at > 0);

        let stored = store.get(QUICK_LINKS_KEY).await.unwrap().unwrap();
        let stored: Vec<QuickLink> = serde_json::from_value(stored).unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(stored.last().unwrap(), &link);
    }

    #[tokio::test]
    async fn add_then_delete_restores_list() {
        let (repo, _) = repo();
        repo.add(new_link("A", "https://a.example")).await.unwrap();
        let before = repo.list().await.unwrap();

        let added = repo.add(new_link("B", "https://b.example")).await.unwrap();
        repo.delete(&added.id).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let (repo, store) = repo();
        assert!(matches!(
            repo.add(new_link("   ", "https://a.example")).await,
            Err(LinkError::InvalidName)
        ));
        assert!(matches!(
            repo.add(new_link("A", "a.example")).await,
            Err(LinkError::InvalidUrl(_))
        ));
        assert!(store.get(QUICK_LINKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_rederives_favicon_on_url_change() {
        let (repo, _) = repo();
        let updated = repo
            .update(
                "4",
                QuickLinkPatch {
                    url: Some("https://codeberg.org".into()),
                    color: Some(LinkColor::Red),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "GitHub");
        assert_eq!(updated.color, LinkColor::Red);
        assert!(updated.favicon_url.contains("domain=codeberg.org"));

        let links = repo.list().await.unwrap();
        assert_eq!(links[3], updated);
    }

    #[tokio::test]
    async fn unknown_id_is_reported() {
        let (repo, store) = repo();
        assert!(matches!(
            repo.update("nope", QuickLinkPatch::default()).await,
            Err(LinkError::NotFound(_))
        ));
        assert!(matches!(
            repo.delete("nope").await,
            Err(LinkError::NotFound(_))
        ));
        assert!(store.get(QUICK_LINKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reorder_is_remove_then_insert() {
        for (from, to) in [(0, 3), (3, 0), (1, 2), (2, 1), (0, 1)] {
            let (repo, _) = repo();
            let mut expected = ids(&repo.list().await.unwrap());
            let moved = expected.remove(from);
            expected.insert(to, moved);

            let links = repo.reorder(from, to).await.unwrap();
            assert_eq!(ids(&links), expected, "reorder({from}, {to})");
            assert_eq!(ids(&repo.list().await.unwrap()), expected);
        }
    }

    #[tokio::test]
    async fn reorder_same_index_is_noop() {
        let (repo, store) = repo();
        let links = repo.reorder(2, 2).await.unwrap();
        assert_eq!(ids(&links), ["1", "2", "3", "4"]);
        assert!(store.get(QUICK_LINKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reorder_out_of_range_is_reported() {
        let (repo, store) = repo();
        assert!(matches!(
            repo.reorder(4, 0).await,
            Err(LinkError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            repo.reorder(0, 9).await,
            Err(LinkError::IndexOutOfRange { index: 9, len: 4 })
        ));
        assert!(store.get(QUICK_LINKS_KEY).await.unwrap().is_none());
    }
}
