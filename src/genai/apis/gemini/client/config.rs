use std::time::Duration;

use crate::app::env::Envy;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_envy(envy: &Envy) -> Config {
        Config {
            api_key: envy.google_api_key.to_string(),
            model: envy.gemini_model().to_string(),
            api_url: envy.gemini_api_url().to_string(),
            timeout: envy.gemini_timeout(),
        }
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}
