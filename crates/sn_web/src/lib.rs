use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use sn_core::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::home))
        .route("/analyze", get(handlers::analyze))
        .route("/audio_summary", get(handlers::audio_summary))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
