pub mod prompt_request_dto;
