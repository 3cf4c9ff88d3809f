use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A to-do as exposed by the proxy. `id` is the Notion page id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
    /// `YYYY-MM-DD`, empty when the page carries no date.
    pub date: String,
}
