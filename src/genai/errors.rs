use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("provider returned no text")]
    Empty,
}
