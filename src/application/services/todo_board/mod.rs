use std::sync::Arc;

use crate::application::ports::todo_api::{ClientError, TodoApi};
use crate::domain::todos::todo::Todo;

/// Client-side view of today's todos.
///
/// Holds the cached list plus the loading flag and the last error message
/// shown in the banner. Toggling is optimistic: the new state is applied
/// before the proxy answers and compensated if the request fails.
pub struct TodoBoard {
    api: Arc<dyn TodoApi>,
    todos: Vec<Todo>,
    loading: bool,
    error: Option<String>,
}

impl TodoBoard {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            api,
            todos: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.done).count()
    }

    /// Reloads from the proxy. The cached list is kept when the fetch fails.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.fetch_todos().await {
            Ok(todos) => self.todos = todos,
            Err(err) => {
                tracing::warn!(error = %err, "todo_refresh_failed");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn toggle(&mut self, id: &str, done: bool) {
        let prior = self.apply_done(id, done);
        if let Err(err) = self.api.update_todo(id, done).await {
            if let Some(prior) = prior {
                self.apply_done(id, prior);
            }
            tracing::warn!(error = %err, todo_id = %id, "todo_toggle_rolled_back");
            self.error = Some(err.to_string());
        }
    }

    /// Appends the created todo. On failure the message is recorded and the
    /// error returned so the caller can keep its input.
    pub async fn add(&mut self, title: &str) -> Result<(), ClientError> {
        match self.api.create_todo(title).await {
            Ok(todo) => {
                self.todos.push(todo);
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Sets `done` on the matching todo and returns its previous value.
    fn apply_done(&mut self, id: &str, done: bool) -> Option<bool> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        Some(std::mem::replace(&mut todo.done, done))
    }
}
