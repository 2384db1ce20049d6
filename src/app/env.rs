use std::time::Duration;

use serde::Deserialize;

use super::config::{
    DEFAULT_APP_ENV, DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_TIMEOUT_SECS,
    DEFAULT_PORT, DEFAULT_RATE_LIMIT_PER_SECOND,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub google_api_key: String,
    pub gemini_model: Option<String>,
    pub gemini_api_url: Option<String>,
    pub gemini_timeout_secs: Option<u64>,

    pub rate_limit_per_second: Option<u64>,
}

impl Envy {
    pub fn app_env(&self) -> &str {
        self.app_env.as_deref().unwrap_or(DEFAULT_APP_ENV)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn gemini_model(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    pub fn gemini_api_url(&self) -> &str {
        self.gemini_api_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_API_URL)
            .trim_end_matches('/')
    }

    pub fn gemini_timeout(&self) -> Duration {
        Duration::from_secs(
            self.gemini_timeout_secs
                .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS),
        )
    }

    // A zero limit would stall every request behind the buffer.
    pub fn rate_limit_per_second(&self) -> u64 {
        self.rate_limit_per_second
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_SECOND)
    }
}
