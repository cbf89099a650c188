pub mod engine;
pub mod error;
pub mod protocol;
pub mod workflow;

pub mod destination_parser;
pub mod image_client;
pub mod llm_client;
pub mod prompt_builder;
