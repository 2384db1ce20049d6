pub mod composer;
pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod instructions;
pub mod models;
pub mod service;
