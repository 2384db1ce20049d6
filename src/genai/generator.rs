use async_trait::async_trait;

use super::errors::GenerationError;

/// A single prompt sent to a hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub user_text: String,
    /// Ask the provider for a JSON body instead of free text.
    pub expects_json: bool,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_text: user_text.into(),
            expects_json: false,
        }
    }

    pub fn expecting_json(mut self) -> Self {
        self.expects_json = true;
        self
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    /// Returns the trimmed text of the model's answer.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
