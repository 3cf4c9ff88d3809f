use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::todos::todo::Todo;

/// Remote database holding the to-do pages.
#[async_trait]
pub trait TodoGateway: Send + Sync {
    /// Todos dated `day`, incomplete ones first.
    async fn list_for_day(&self, day: NaiveDate) -> anyhow::Result<Vec<Todo>>;
    async fn create(&self, title: &str, day: NaiveDate) -> anyhow::Result<Todo>;
    async fn set_done(&self, page_id: &str, done: bool) -> anyhow::Result<()>;
}
