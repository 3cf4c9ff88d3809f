use crate::application::ports::clock::Clock;
use crate::application::ports::todo_gateway::TodoGateway;
use crate::domain::todos::kst::kst_day;
use crate::domain::todos::todo::Todo;

#[derive(thiserror::Error, Debug)]
pub enum CreateTodoError {
    #[error("title is required")]
    MissingTitle,
    #[error(transparent)]
    Gateway(#[from] anyhow::Error),
}

pub struct CreateTodo<'a, G: TodoGateway + ?Sized, C: Clock + ?Sized> {
    pub gateway: &'a G,
    pub clock: &'a C,
}

impl<'a, G: TodoGateway + ?Sized, C: Clock + ?Sized> CreateTodo<'a, G, C> {
    /// Creates an open todo dated to the current KST day.
    pub async fn execute(&self, title: &str) -> Result<Todo, CreateTodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CreateTodoError::MissingTitle);
        }
        let day = kst_day(self.clock.now());
        Ok(self.gateway.create(title, day).await?)
    }
}
