use crate::{app::models::api_error::ApiError, genai::generator::GenerationRequest, AppState};

use super::{
    composer,
    dtos::prompt_request_dto::PromptRequestDto,
    enums::target_service::TargetService,
    errors::PromptsApiError,
    instructions::system_instruction,
    models::prompt_inputs::PromptInputs,
};

pub fn compose_prompt(dto: &PromptRequestDto) -> Result<String, ApiError> {
    let Some(inputs) = &dto.inputs else {
        return Err(PromptsApiError::MissingInputs.value());
    };

    Ok(composer::compose_for_tag(dto.target_model(), inputs))
}

pub async fn generate_prompt(dto: &PromptRequestDto, state: &AppState) -> Result<String, ApiError> {
    let Some(inputs) = &dto.inputs else {
        return Err(PromptsApiError::MissingInputs.value());
    };

    let service = match dto.target_model().map(|tag| tag.parse::<TargetService>()) {
        Some(Ok(service)) => Some(service),
        Some(Err(e)) => {
            tracing::warn!(%e, "using the generic instruction");
            None
        }
        None => None,
    };

    let draft = match service {
        Some(service) => composer::compose(service, inputs),
        None => composer::compose_generic(inputs),
    };
    tracing::debug!(
        %draft,
        service = service.map_or("generic", |service| service.display_name()),
        "drafted prompt"
    );

    let request = GenerationRequest::new(system_instruction(service), build_brief(inputs, &draft));

    match state.generator.generate(request).await {
        Ok(final_prompt) => Ok(final_prompt),
        Err(e) => {
            tracing::error!(%e, service = ?service, "generate_prompt failed");
            Err(PromptsApiError::GenerationFailed.value())
        }
    }
}

fn label(key: &str) -> &str {
    match key {
        "prompt" => "Prompt",
        "subject" | "character" => "Character & Action",
        "scene" => "Scene & Environment",
        "style" => "Artistic Style",
        "shot" | "cameraShot" | "shotStyle" => "Camera Shot",
        "angle" => "Camera Angle",
        "motion" | "motions" | "cameraMotion" => "Camera Motion",
        "lighting" => "Lighting Style",
        "audioDesc" => "Audio Description",
        "dialogue" | "dialogueText" => "Dialogue",
        "negative" | "negativePrompt" => "Negative Prompt (what to avoid)",
        "aspect" | "aspectRatio" => "Aspect Ratio",
        "duration" => "Duration (seconds)",
        _ => key,
    }
}

pub fn build_brief(inputs: &PromptInputs, draft: &str) -> String {
    let mut brief =
        "Create a detailed, high-quality video prompt based on the following elements:\n"
            .to_string();

    for (key, value) in inputs.iter() {
        let line = match value.text() {
            Some(text) => text,
            None if value.is_true() => "yes".to_string(),
            None => continue,
        };
        brief.push_str(&format!("- {}: {}\n", label(key), line));
    }

    if !draft.is_empty() {
        brief.push_str(&format!("Draft prompt: {}\n", draft));
    }

    brief
}
