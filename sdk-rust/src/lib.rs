mod client_utils;
pub mod content_sdk_test;
mod document_store;
mod errors;
pub mod google;
mod language_model;
pub mod notion;
pub mod ollama;
mod opentelemetry;
mod registry;
mod types;

pub use document_store::DocumentStore;
pub use errors::*;
pub use language_model::LanguageModel;
pub use registry::{GeneratedText, LanguageModelRegistry, ProviderChoice};
pub use types::*;
