use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
    routing::{get, patch},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::error::{ApiError, DONE_REQUIRED, ErrorBody, TITLE_REQUIRED, not_found};
use crate::application::use_cases::todos::create_todo::CreateTodo;
use crate::application::use_cases::todos::list_today::ListTodayTodos;
use crate::application::use_cases::todos::set_done::{SetTodoDone, is_valid_page_id};
use crate::bootstrap::app_context::AppContext;
use crate::domain::todos::todo::Todo;

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    pub done: bool,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos).post(create_todo).fallback(not_found),
        )
        .route("/todos/:id", patch(update_todo).fallback(not_found))
        .with_state(ctx)
}

/// Malformed JSON is a 400 of its own; a well-formed body of the wrong
/// shape is reported with the handler's field message.
fn parse_body<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
    missing: &'static str,
) -> Result<T, ApiError> {
    let body = body?;
    let value: Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::Validation("invalid JSON body"))?;
    serde_json::from_value(value).map_err(|_| ApiError::Validation(missing))
}

#[utoipa::path(get, path = "/todos", tag = "Todos",
    params(("X-API-Key" = String, Header, description = "Shared proxy key")),
    responses(
        (status = 200, body = TodoListResponse),
        (status = 401, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn list_todos(
    State(ctx): State<AppContext>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let gateway = ctx.todo_gateway();
    let clock = ctx.clock();
    let uc = ListTodayTodos {
        gateway: gateway.as_ref(),
        clock: clock.as_ref(),
    };
    let todos = uc.execute().await?;
    Ok(Json(TodoListResponse { todos }))
}

#[utoipa::path(post, path = "/todos", tag = "Todos",
    params(("X-API-Key" = String, Header, description = "Shared proxy key")),
    request_body = CreateTodoRequest,
    responses(
        (status = 201, body = Todo),
        (status = 400, body = ErrorBody),
        (status = 401, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn create_todo(
    State(ctx): State<AppContext>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let req: CreateTodoRequest = parse_body(body, TITLE_REQUIRED)?;
    let gateway = ctx.todo_gateway();
    let clock = ctx.clock();
    let uc = CreateTodo {
        gateway: gateway.as_ref(),
        clock: clock.as_ref(),
    };
    let todo = uc.execute(&req.title).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(patch, path = "/todos/{id}", tag = "Todos",
    params(
        ("id" = String, Path, description = "Notion page id"),
        ("X-API-Key" = String, Header, description = "Shared proxy key")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, body = SuccessResponse),
        (status = 400, body = ErrorBody),
        (status = 401, body = ErrorBody),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ))]
pub async fn update_todo(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    if !is_valid_page_id(&id) {
        return Err(ApiError::NotFound);
    }
    let req: UpdateTodoRequest = parse_body(body, DONE_REQUIRED)?;
    let gateway = ctx.todo_gateway();
    let uc = SetTodoDone {
        gateway: gateway.as_ref(),
    };
    uc.execute(&id, req.done).await?;
    Ok(Json(SuccessResponse { success: true }))
}
