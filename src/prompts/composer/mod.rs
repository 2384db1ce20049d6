pub mod layouts;
pub mod rule;

use crate::prompts::{enums::target_service::TargetService, models::prompt_inputs::PromptInputs};

use self::rule::tidy_clause;

pub fn compose(service: TargetService, inputs: &PromptInputs) -> String {
    let mut prompt = String::new();

    for section in layouts::layout(service) {
        let Some(segment) = section.apply(inputs) else {
            continue;
        };

        if !prompt.is_empty() {
            prompt.push_str(section.lead);
        }
        prompt.push_str(&segment);
    }

    prompt
}

/// Comma-joins every filled-in text or number value in form order. Used when
/// the target service is unknown, so no flags are emitted.
pub fn compose_generic(inputs: &PromptInputs) -> String {
    inputs
        .iter()
        .filter(|(_, value)| !value.is_boolean())
        .filter_map(|(_, value)| value.text())
        .filter_map(|text| tidy_clause(&text))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn compose_for_tag(tag: Option<&str>, inputs: &PromptInputs) -> String {
    let Some(tag) = tag else {
        return compose_generic(inputs);
    };

    match tag.parse::<TargetService>() {
        Ok(service) => compose(service, inputs),
        Err(e) => {
            tracing::warn!(%e, "composing with generic rules");
            compose_generic(inputs)
        }
    }
}
