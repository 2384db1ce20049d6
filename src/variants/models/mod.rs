pub mod variants_response;
