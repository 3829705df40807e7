use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod dto;
pub mod handlers;
pub mod infer;
pub mod service;
pub mod state;

use config::Config;
use state::AppState;

/// Fixed instruction prepended to every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful and medically knowledgeable \
assistant. Respond with clear, safe medical advice.";

pub fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin("*".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([http::header::CONTENT_TYPE]);

    // Build router
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: Config) {
    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
