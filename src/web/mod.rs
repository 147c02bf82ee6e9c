use axum::{response::Json, routing::get, Router};
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

pub mod responses;

pub use responses::*;

pub fn create_router() -> Router {
    Router::new()
        // `get` also answers HEAD, with the body stripped
        .route("/", get(status))
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::default())
}

/// Serves the keep-alive endpoint until `shutdown` flips to true.
pub async fn serve(config: &ServerConfig, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
    let app = create_router();

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server starting on {}:{}", config.host, config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown.borrow() {
                if shutdown.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;

    Ok(())
}
