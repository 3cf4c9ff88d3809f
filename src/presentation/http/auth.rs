use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use super::error::ApiError;
use crate::bootstrap::app_context::AppContext;

pub const API_KEY_HEADER: &str = "x-api-key";

/// `GET /health` is the only route reachable without the shared key.
fn is_public(method: &Method, path: &str) -> bool {
    method == Method::GET && path == "/health"
}

/// Runs before routing so unknown paths without a key also get 401.
pub async fn require_api_key(
    State(ctx): State<AppContext>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if is_public(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    if presented != Some(ctx.cfg.api_key.as_str()) {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            key_present = presented.is_some(),
            "api_key_rejected"
        );
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(req).await)
}
