use crate::config::Config;

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl AppState {
    /// One client for the process lifetime so upstream connections are
    /// pooled across requests.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}
