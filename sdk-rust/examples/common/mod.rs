use content_sdk::{
    google::{GoogleModel, GoogleModelOptions, DEFAULT_GOOGLE_MODEL},
    ollama::{OllamaModel, OllamaModelOptions, DEFAULT_OLLAMA_MODEL},
    LanguageModel,
};
use std::sync::Arc;

pub fn get_model(provider: &str) -> Arc<dyn LanguageModel> {
    match provider {
        "gemini" => Arc::new(GoogleModel::new(
            DEFAULT_GOOGLE_MODEL,
            GoogleModelOptions {
                api_key: std::env::var("GEMINI_API_KEY")
                    .expect("GEMINI_API_KEY environment variable must be set"),
                ..Default::default()
            },
        )),
        "ollama" => Arc::new(OllamaModel::new(
            std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
            OllamaModelOptions {
                base_url: std::env::var("OLLAMA_BASE_URL").ok(),
                ..Default::default()
            },
        )),
        _ => panic!("Unsupported provider: {provider}"),
    }
}
