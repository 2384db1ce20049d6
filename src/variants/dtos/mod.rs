pub mod generate_variants_dto;
