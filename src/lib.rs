use std::sync::Arc;

use crate::{app::env::Envy, genai::generator::TextGenerator};

pub mod app;
pub mod genai;
pub mod prompts;
pub mod variants;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub generator: Arc<dyn TextGenerator>,
}
