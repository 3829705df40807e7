use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::SYSTEM_PROMPT;
use crate::dto::{ChatRequest, ChatResponse};
use crate::infer::{self, OpenAIMessage, ROLE_SYSTEM, ROLE_USER};
use crate::service;
use crate::state::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> service::Result<Json<ChatResponse>> {
    let message = match request.message {
        Some(message) if !message.is_empty() => message,
        _ => return Err(service::Error::BadRequest("No message provided".into())),
    };

    let messages = [
        OpenAIMessage {
            role: ROLE_SYSTEM,
            content: SYSTEM_PROMPT.into(),
        },
        OpenAIMessage {
            role: ROLE_USER,
            content: message.into(),
        },
    ];

    let reply = infer::openai_request(&state.http, &state.config, &messages)
        .await
        .map_err(|err| {
            tracing::error!("Completion request failed: {}", err);
            service::Error::from(err)
        })?;

    Ok(Json(ChatResponse { reply }))
}
