use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::todos::create_todo::CreateTodoError;

pub const TITLE_REQUIRED: &str = "title is required";
pub const DONE_REQUIRED: &str = "done (boolean) is required";

/// Every non-2xx the proxy produces, rendered as `{"error": <message>}`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Validation(&'static str),
    #[error("Not Found")]
    NotFound,
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "request_failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CreateTodoError> for ApiError {
    fn from(err: CreateTodoError) -> Self {
        match err {
            CreateTodoError::MissingTitle => ApiError::Validation(TITLE_REQUIRED),
            CreateTodoError::Gateway(e) => ApiError::Internal(e),
        }
    }
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
