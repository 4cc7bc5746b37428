use crate::{LanguageModel, LanguageModelInput};
use std::{fmt, sync::Arc};
use tracing::{error, info, warn};

/// Which provider(s) a generation call may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderChoice {
    /// Gemini only, no fallback.
    Gemini,
    /// Ollama only, no fallback.
    Ollama,
    /// Gemini first, Ollama when Gemini yields nothing.
    Auto,
}

impl ProviderChoice {
    /// Resolve a provider name. "gemini" matches case-insensitively while
    /// "ollama" must match exactly; any other value, including an empty one,
    /// selects the fallback path.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("gemini") {
            Self::Gemini
        } else if name == "ollama" {
            Self::Ollama
        } else {
            Self::Auto
        }
    }
}

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gemini => "gemini",
            Self::Ollama => "ollama",
            Self::Auto => "auto",
        })
    }
}

/// Text produced by one of the registered providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    /// Provider identifier of the model that produced `text`.
    pub provider: &'static str,
    pub model_id: String,
}

/// Holds the two interchangeable text-generation providers and applies the
/// selection policy between them.
#[derive(Clone)]
pub struct LanguageModelRegistry {
    gemini: Arc<dyn LanguageModel>,
    ollama: Arc<dyn LanguageModel>,
}

impl LanguageModelRegistry {
    pub fn new(gemini: Arc<dyn LanguageModel>, ollama: Arc<dyn LanguageModel>) -> Self {
        Self { gemini, ollama }
    }

    #[must_use]
    pub fn gemini(&self) -> &Arc<dyn LanguageModel> {
        &self.gemini
    }

    #[must_use]
    pub fn ollama(&self) -> &Arc<dyn LanguageModel> {
        &self.ollama
    }

    /// Generate text with the provider selected by `provider_name`.
    /// Provider failures are logged and reported as `None`.
    pub async fn generate(&self, prompt: &str, provider_name: &str) -> Option<GeneratedText> {
        let choice = ProviderChoice::parse(provider_name);
        info!(provider = %choice, "Generating content");

        match choice {
            ProviderChoice::Gemini => Self::generate_with(&self.gemini, prompt).await,
            ProviderChoice::Ollama => Self::generate_with(&self.ollama, prompt).await,
            ProviderChoice::Auto => {
                if let Some(generated) = Self::generate_with(&self.gemini, prompt).await {
                    return Some(generated);
                }
                info!("Gemini failed, trying Ollama");
                Self::generate_with(&self.ollama, prompt).await
            }
        }
    }

    async fn generate_with(model: &Arc<dyn LanguageModel>, prompt: &str) -> Option<GeneratedText> {
        match model.generate(LanguageModelInput::new(prompt)).await {
            Ok(response) if response.text.trim().is_empty() => {
                warn!(
                    provider = model.provider(),
                    model = %model.model_id(),
                    "Model returned empty text"
                );
                None
            }
            Ok(response) => Some(GeneratedText {
                text: response.text,
                provider: model.provider(),
                model_id: model.model_id(),
            }),
            Err(err) => {
                error!(
                    provider = model.provider(),
                    model = %model.model_id(),
                    error = %err,
                    "Error generating text"
                );
                None
            }
        }
    }
}
