use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};

use tabhome::bootstrap::app_context::{AppContext, AppServices};
use tabhome::bootstrap::config::Config;
use tabhome::infrastructure::clock::SystemClock;
use tabhome::infrastructure::notion::todo_gateway_notion::NotionTodoGateway;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "tabhome=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting tabhome proxy");

    let gateway = Arc::new(NotionTodoGateway::new(cfg.notion.clone()));
    let services = AppServices::new(gateway, Arc::new(SystemClock));
    let ctx = AppContext::new(cfg.clone(), services);

    let app = tabhome::presentation::http::router(ctx);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(?e, "API server failed");
        return Err(e.into());
    }
    info!("HTTP API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(?e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown_requested");
}
