use axum::Router;
use axum::extract::MatchedPath;
use axum::middleware;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;

pub mod auth;
pub mod cors;
pub mod error;
pub mod health;
pub mod openapi;
pub mod todos;


/// Full proxy surface. Layer order, outermost first: tracing, CORS (which
/// answers every `OPTIONS` itself), API-key check, routes. The OpenAPI
/// document and Swagger UI sit behind the key like every other route.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(health::routes(ctx.clone()))
        .merge(todos::routes(ctx.clone()))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .fallback(error::not_found)
        .layer(middleware::from_fn_with_state(ctx, auth::require_api_key))
        .layer(middleware::from_fn(cors::permissive_cors))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
