use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::LinkColor;
use super::favicon::favicon_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub id: String,
    pub name: String,
    pub url: String,
    pub color: LinkColor,
    pub favicon_url: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

/// Fields the user supplies; id, favicon and timestamp are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuickLink {
    pub name: String,
    pub url: String,
    pub color: LinkColor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickLinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub color: Option<LinkColor>,
}

impl QuickLink {
    pub fn create(new: NewQuickLink, now_ms: i64) -> Self {
        Self {
            id: generate_link_id(now_ms),
            favicon_url: favicon_url(&new.url),
            name: new.name,
            url: new.url,
            color: new.color,
            created_at: now_ms,
        }
    }

    pub fn apply(&mut self, patch: QuickLinkPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(url) = patch.url {
            self.favicon_url = favicon_url(&url);
            self.url = url;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Base-36 timestamp followed by a base-36 random suffix. Unique enough for a
/// single user's list; not a global identifier.
pub fn generate_link_id(now_ms: i64) -> String {
    let suffix: u64 = rand::thread_rng().r#gen();
    format!(
        "{}{}",
        to_base36(now_ms.max(0) as u64),
        to_base36(suffix)
    )
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

pub fn default_links(now_ms: i64) -> Vec<QuickLink> {
    let seed = [
        ("1", "ChatGPT", "https://chat.openai.com", LinkColor::Green),
        ("2", "Claude", "https://claude.ai", LinkColor::Orange),
        ("3", "Perplexity", "https://perplexity.ai", LinkColor::Blue),
        ("4", "GitHub", "https://github.com", LinkColor::Purple),
    ];
    seed.into_iter()
        .map(|(id, name, url, color)| QuickLink {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            color,
            favicon_url: favicon_url(url),
            created_at: now_ms,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_matches_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn ids_start_with_timestamp() {
        let id = generate_link_id(1_700_000_000_000);
        assert!(id.starts_with("loyw3v28"));
        assert!(id.len() > "loyw3v28".len());
        assert_ne!(id, generate_link_id(1_700_000_000_000));
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let link = default_links(42).remove(0);
        let v = serde_json::to_value(&link).unwrap();
        assert_eq!(v["faviconUrl"], "https://www.google.com/s2/favicons?domain=chat.openai.com&sz=64");
        assert_eq!(v["createdAt"], 42);
        assert_eq!(v["color"], "from-green-500 to-green-600");
    }

    #[test]
    fn patch_rederives_favicon_only_for_url() {
        let mut link = default_links(0).remove(3);
        link.apply(QuickLinkPatch {
            name: Some("Code".into()),
            ..Default::default()
        });
        assert_eq!(link.name, "Code");
        assert!(link.favicon_url.contains("github.com"));

        link.apply(QuickLinkPatch {
            url: Some("https://gitlab.com".into()),
            ..Default::default()
        });
        assert_eq!(link.url, "https://gitlab.com");
        assert!(link.favicon_url.contains("domain=gitlab.com"));
    }
}
