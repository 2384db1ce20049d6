pub mod target_service;
