use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder, Response};
use serde_json::json;

use super::schema::{NotionPage, QueryResponse};
use crate::application::ports::todo_gateway::TodoGateway;
use crate::bootstrap::config::NotionConfig;
use crate::domain::todos::kst::format_day;
use crate::domain::todos::todo::Todo;

pub struct NotionTodoGateway {
    client: reqwest::Client,
    cfg: NotionConfig,
}

impl NotionTodoGateway {
    pub fn new(cfg: NotionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            cfg,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.cfg.base_url, path))
            .bearer_auth(&self.cfg.token)
            .header("Notion-Version", &self.cfg.api_version)
    }

    async fn send(&self, req: RequestBuilder) -> anyhow::Result<Response> {
        let resp = req
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Notion request failed: {e}"))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            anyhow::bail!("Notion API error: {} - {}", status.as_u16(), body);
        }
        Ok(resp)
    }
}

#[async_trait]
impl TodoGateway for NotionTodoGateway {
    async fn list_for_day(&self, day: NaiveDate) -> anyhow::Result<Vec<Todo>> {
        let path = format!("/databases/{}/query", self.cfg.database_id);
        let mut todos = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut body = json!({
                "filter": {
                    "property": "Date",
                    "date": { "equals": format_day(day) }
                },
                "sorts": [
                    { "property": "Done", "direction": "ascending" }
                ]
            });
            if let Some(c) = &cursor {
                body["start_cursor"] = json!(c);
            }
            let page: QueryResponse = self
                .send(self.request(Method::POST, &path).json(&body))
                .await?
                .json()
                .await
                .map_err(|e| anyhow::anyhow!("failed to decode Notion query: {e}"))?;
            todos.extend(page.results.into_iter().map(Todo::from));
            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }
        tracing::debug!(day = %day, count = todos.len(), "notion_todos_listed");
        Ok(todos)
    }

    async fn create(&self, title: &str, day: NaiveDate) -> anyhow::Result<Todo> {
        let body = json!({
            "parent": { "database_id": self.cfg.database_id },
            "properties": {
                "Title": { "title": [ { "text": { "content": title } } ] },
                "Date": { "date": { "start": format_day(day) } },
                "Done": { "checkbox": false }
            }
        });
        let page: NotionPage = self
            .send(self.request(Method::POST, "/pages").json(&body))
            .await?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("failed to decode Notion page: {e}"))?;
        tracing::info!(page_id = %page.id, "notion_todo_created");
        Ok(page.into())
    }

    async fn set_done(&self, page_id: &str, done: bool) -> anyhow::Result<()> {
        let body = json!({
            "properties": {
                "Done": { "checkbox": done }
            }
        });
        self.send(
            self.request(Method::PATCH, &format!("/pages/{page_id}"))
                .json(&body),
        )
        .await?;
        tracing::info!(page_id = %page_id, done, "notion_todo_updated");
        Ok(())
    }
}
