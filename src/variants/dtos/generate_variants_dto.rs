use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariantsDto {
    #[serde(alias = "text")]
    #[validate(
        required(message = "inputText is required"),
        length(
            min = 1,
            max = 2000,
            message = "inputText must be between 1 and 2000 characters."
        )
    )]
    pub input_text: Option<String>,
    /// What the text describes, e.g. `character` or `scene`.
    #[validate(length(max = 32, message = "fieldType must be at most 32 characters."))]
    pub field_type: Option<String>,
}

impl GenerateVariantsDto {
    pub fn sanitized(&self) -> Self {
        Self {
            input_text: self.input_text.as_ref().map(|text| text.trim().to_string()),
            field_type: self
                .field_type
                .as_ref()
                .map(|field| field.trim().to_lowercase())
                .filter(|field| !field.is_empty()),
        }
    }
}
