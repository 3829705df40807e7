use std::env;
use std::env::VarError;
use std::fmt;

use anyhow::Context;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_PORT: u16 = 5001;

/// Runtime configuration, read from the environment once at startup and
/// handed to the application state. Handlers never touch the environment.
#[derive(Clone)]
pub struct Config {
    /// Bearer credential for the completion API. Redacted from `Debug`
    /// output and never logged.
    pub api_key: Box<str>,
    pub model: Box<str>,
    /// Base URL of the OpenAI-compatible API, without the route suffix.
    pub api_url: Box<str>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("GROQ_API_KEY cannot be empty");
        }

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let api_url = env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let port = match env::var("PORT") {
            Ok(port) => port.parse::<u16>().context("Invalid PORT")?,
            Err(VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err).context("Failed to read PORT"),
        };

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            api_url: api_url.trim_end_matches('/').into(),
            port,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("port", &self.port)
            .finish()
    }
}
