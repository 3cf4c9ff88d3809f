use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::ports::todo_gateway::TodoGateway;

static PAGE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-f0-9-]+$").expect("valid regex"));

/// Lowercase hex and hyphens, the shape of a Notion page id.
pub fn is_valid_page_id(id: &str) -> bool {
    PAGE_ID_RE.is_match(id)
}

pub struct SetTodoDone<'a, G: TodoGateway + ?Sized> {
    pub gateway: &'a G,
}

impl<'a, G: TodoGateway + ?Sized> SetTodoDone<'a, G> {
    pub async fn execute(&self, page_id: &str, done: bool) -> anyhow::Result<()> {
        self.gateway.set_done(page_id, done).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_shape() {
        assert!(is_valid_page_id("abc123"));
        assert!(is_valid_page_id("1f2e3d4c-0000-4abc-9def-0123456789ab"));
        assert!(!is_valid_page_id(""));
        assert!(!is_valid_page_id("ABC123"));
        assert!(!is_valid_page_id("xyz"));
        assert!(!is_valid_page_id("abc/123"));
    }
}
