pub mod apis;
pub mod errors;
pub mod generator;
