use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, header::CONTENT_TYPE};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::application::ports::todo_api::{ClientError, TodoApi};
use crate::bootstrap::config::ClientConfig;
use crate::domain::todos::todo::Todo;

pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Deserialize)]
struct TodosEnvelope {
    todos: Vec<Todo>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Talks to the proxy's `/todos` routes. One attempt per call.
pub struct ReqwestTodoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReqwestTodoClient {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.into()))?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.into()))
    }
}

#[async_trait]
impl TodoApi for ReqwestTodoClient {
    async fn fetch_todos(&self) -> Result<Vec<Todo>, ClientError> {
        let resp = self.send(self.request(Method::GET, "/todos")).await?;
        let envelope: TodosEnvelope = Self::decode(resp).await?;
        Ok(envelope.todos)
    }

    async fn create_todo(&self, title: &str) -> Result<Todo, ClientError> {
        let req = self
            .request(Method::POST, "/todos")
            .json(&json!({ "title": title }));
        Self::decode(self.send(req).await?).await
    }

    async fn update_todo(&self, id: &str, done: bool) -> Result<(), ClientError> {
        let req = self
            .request(Method::PATCH, &format!("/todos/{id}"))
            .json(&json!({ "done": done }));
        self.send(req).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ReqwestTodoClient {
        ReqwestTodoClient::new(&ClientConfig {
            api_url: server.uri(),
            api_key: "k-123".into(),
            storage_path: None,
        })
    }

    #[tokio::test]
    async fn fetch_sends_key_and_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(header("x-api-key", "k-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "todos": [{"id": "a1", "title": "t", "done": false, "date": "2026-10-19"}]
            })))
            .mount(&server)
            .await;

        let todos = client(&server).fetch_todos().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "a1");
    }

    #[tokio::test]
    async fn create_posts_title() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/todos"))
            .and(body_json(json!({"title": "Read"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!(
                {"id": "b2", "title": "Read", "done": false, "date": "2026-10-19"}
            )))
            .mount(&server)
            .await;

        let todo = client(&server).create_todo("Read").await.unwrap();
        assert_eq!(todo.id, "b2");
    }

    #[tokio::test]
    async fn update_patches_done() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/todos/abc123"))
            .and(body_json(json!({"done": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).update_todo("abc123", true).await.unwrap();
    }

    #[tokio::test]
    async fn server_message_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).fetch_todos().await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 401, .. }));
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[tokio::test]
    async fn falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/todos/abc"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client(&server).update_todo("abc", false).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
