pub mod field_value;
pub mod prompt_inputs;
pub mod prompt_response;
