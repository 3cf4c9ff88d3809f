use axum::{Json, Router, extract::State, routing::get};
use chrono::SecondsFormat;
use serde::Serialize;
use utoipa::ToSchema;

use super::error::not_found;
use crate::bootstrap::app_context::AppContext;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResp> {
    let timestamp = ctx.clock().now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Json(HealthResp {
        status: "ok",
        timestamp,
    })
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .with_state(ctx)
}
