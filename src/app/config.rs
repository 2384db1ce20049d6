pub const APP_NAME: &str = "Director's Cut";

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro-latest";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 5;
pub const BUFFER_SIZE: usize = 1024;
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;
