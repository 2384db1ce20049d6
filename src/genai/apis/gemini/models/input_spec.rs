use serde::Serialize;

use crate::genai::generator::GenerationRequest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

impl InputSpec {
    pub fn from_request(request: &GenerationRequest) -> InputSpec {
        InputSpec {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.user_text.to_string(),
                }],
            }],
            generation_config: match request.expects_json {
                true => Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                }),
                false => None,
            },
        }
    }
}
