use utoipa::OpenApi;

use super::error::ErrorBody;
use super::health::HealthResp;
use super::todos::{CreateTodoRequest, SuccessResponse, TodoListResponse, UpdateTodoRequest};
use crate::domain::todos::todo::Todo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::health::health,
        crate::presentation::http::todos::list_todos,
        crate::presentation::http::todos::create_todo,
        crate::presentation::http::todos::update_todo,
    ),
    components(schemas(
        HealthResp,
        Todo,
        TodoListResponse,
        CreateTodoRequest,
        UpdateTodoRequest,
        SuccessResponse,
        ErrorBody,
    )),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Todos", description = "Today's to-dos in the Notion database")
    )
)]
pub struct ApiDoc;
