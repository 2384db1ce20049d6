use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VariantsResponse {
    pub variants: Vec<String>,
}
