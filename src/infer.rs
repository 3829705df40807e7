//! Minimal client for an OpenAI-compatible chat completion API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

/// Sampling temperature sent with every completion request.
pub const TEMPERATURE: f32 = 0.5;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Response parsing failed: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("Error response from API: {status}")]
    ErrorResponse {
        status: StatusCode,
        details: Box<str>,
    },

    #[error("Completion response contained no choices")]
    NoChoices,
}

#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [OpenAIMessage],
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct OpenAIMessage {
    pub role: &'static str,
    pub content: Box<str>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Box<str>,
}

/// One synchronous completion round trip. Anything other than a 200 with a
/// non-empty `choices` list comes back as an [`ApiError`].
pub async fn openai_request(
    client: &reqwest::Client,
    config: &Config,
    messages: &[OpenAIMessage],
) -> Result<Box<str>, ApiError> {
    let openai_request = OpenAIRequest {
        model: &config.model,
        messages,
        temperature: TEMPERATURE,
    };

    let response = client
        .post(format!("{}/chat/completions", config.api_url))
        .bearer_auth(&config.api_key)
        .json(&openai_request)
        .send()
        .await?;

    let status = response.status();
    let response_text = response.text().await?;

    if status != StatusCode::OK {
        return Err(ApiError::ErrorResponse {
            status,
            details: response_text.into(),
        });
    }

    let response: OpenAIResponse = serde_json::from_str(&response_text)?;
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ApiError::NoChoices)
}
