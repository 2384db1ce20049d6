use crate::{
    app::models::api_error::ApiError,
    genai::{errors::GenerationError, generator::GenerationRequest},
    AppState,
};

use super::{dtos::generate_variants_dto::GenerateVariantsDto, errors::VariantsApiError};

pub const VARIANT_COUNT: usize = 3;

pub async fn generate_variants(
    dto: &GenerateVariantsDto,
    state: &AppState,
) -> Result<Vec<String>, ApiError> {
    let Some(input_text) = &dto.input_text else {
        return Err(VariantsApiError::MissingInputText.value());
    };

    let request = GenerationRequest::new(
        system_instruction(dto.field_type.as_deref()),
        input_text.to_string(),
    )
    .expecting_json();

    let text = match state.generator.generate(request).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(%e, "generate_variants failed");
            return Err(VariantsApiError::GenerationFailed.value());
        }
    };

    match parse_variants(&text) {
        Ok(variants) => Ok(variants),
        Err(e) => {
            tracing::error!(%e, %text, "generate_variants returned an unreadable answer");
            Err(VariantsApiError::GenerationFailed.value())
        }
    }
}

pub fn system_instruction(field_type: Option<&str>) -> String {
    let subject = match field_type {
        Some(field) => format!("{} description", field),
        None => "idea".to_string(),
    };

    format!(
        "You are a creative writing assistant for a film director. Your task is to take a \
         user's basic {subject} and enhance it into {VARIANT_COUNT} more vivid, cinematic, and \
         descriptive alternatives for an AI video prompt. Focus on strong verbs, evocative \
         adjectives, and sensory details. Return the response ONLY as a valid JSON array of \
         {VARIANT_COUNT} strings.\n\n\
         Example:\n\
         User Input: \"a man on a beach\"\n\
         Your Output: [\"A lone figure silhouetted against a fiery sunset on a windswept, \
         desolate beach.\", \"A weathered fisherman mending his nets on a shore littered with \
         driftwood and seaweed, the salty air thick around him.\", \"A joyful tourist in bright \
         swim trunks building a sandcastle with his laughing child on a crowded, sun-drenched \
         beach.\"]\n"
    )
}

/// Reads the JSON array out of the model's answer, ignoring any Markdown
/// fence or chatter around it. Keeps at most [`VARIANT_COUNT`] non-blank
/// entries.
pub fn parse_variants(text: &str) -> Result<Vec<String>, GenerationError> {
    let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) else {
        return Err(GenerationError::Parse("no JSON array in answer".to_string()));
    };

    if end < start {
        return Err(GenerationError::Parse("no JSON array in answer".to_string()));
    }

    let variants: Vec<String> = serde_json::from_str(&text[start..=end])
        .map_err(|e| GenerationError::Parse(e.to_string()))?;

    let variants: Vec<String> = variants
        .iter()
        .map(|variant| variant.trim())
        .filter(|variant| !variant.is_empty())
        .take(VARIANT_COUNT)
        .map(str::to_string)
        .collect();

    match variants.is_empty() {
        true => Err(GenerationError::Empty),
        false => Ok(variants),
    }
}
