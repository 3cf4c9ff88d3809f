use async_trait::async_trait;

use crate::domain::todos::todo::Todo;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Non-2xx from the proxy; `message` is the server's `error` field or `HTTP <status>`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("invalid response: {0}")]
    Decode(#[source] anyhow::Error),
}

/// Client side of the proxy's to-do routes.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError>;
    async fn create_todo(&self, title: &str) -> Result<Todo, ClientError>;
    async fn update_todo(&self, id: &str, done: bool) -> Result<(), ClientError>;
}
