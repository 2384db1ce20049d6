use serde::Deserialize;
use validator::Validate;

use crate::prompts::models::prompt_inputs::PromptInputs;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequestDto {
    #[validate(length(max = 64, message = "targetModel must be at most 64 characters."))]
    pub target_model: Option<String>,
    pub inputs: Option<PromptInputs>,
}

impl PromptRequestDto {
    pub fn target_model(&self) -> Option<&str> {
        self.target_model
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}
