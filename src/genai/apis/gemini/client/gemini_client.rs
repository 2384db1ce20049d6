use async_trait::async_trait;

use crate::genai::{
    apis::gemini::{
        models::input_spec::InputSpec, structs::generate_content_response::GenerateContentResponse,
    },
    errors::GenerationError,
    generator::{GenerationRequest, TextGenerator},
};

use super::config::Config;

#[derive(Clone, Debug)]
pub struct GeminiClient {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Config) -> Result<GeminiClient, GenerationError> {
        let http_client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        Ok(GeminiClient {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let input_spec = InputSpec::from_request(&request);

        let result = self
            .http_client
            .post(self.config.generate_content_url())
            .query(&[("key", &self.config.api_key)])
            .json(&input_spec)
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!("gemini generate (1): {:?}", e);
                return Err(GenerationError::Transport(e.to_string()));
            }
        };

        let status = res.status();
        let text = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("gemini generate (2): {:?}", e);
                return Err(GenerationError::Transport(e.to_string()));
            }
        };

        if !status.is_success() {
            tracing::warn!("gemini generate (3): {} {}", status, text);
            return Err(GenerationError::Status {
                code: status.as_u16(),
                body: text,
            });
        }

        let response: GenerateContentResponse = match serde_json::from_str(&text) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("gemini generate (4): {:?}", text);
                return Err(GenerationError::Parse(e.to_string()));
            }
        };

        match response.text() {
            Some(text) => Ok(text),
            None => {
                tracing::warn!("gemini generate (5): no text in {:?}", response);
                Err(GenerationError::Empty)
            }
        }
    }
}
