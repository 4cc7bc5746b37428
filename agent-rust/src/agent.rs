use crate::{
    opentelemetry::trace_run,
    post_process::{extract_tags, extract_title, preview, truncate_chars, word_count, PREVIEW_CHARS},
    prompt::{ContentSuggestions, PromptEngine},
    request::{ContentRequest, ContentType},
    settings::Settings,
    AgentParams, ContentError, ContentStats,
};
use content_sdk::{
    google::{GoogleModel, GoogleModelOptions, DEFAULT_GOOGLE_MODEL},
    notion::{NotionStore, NotionStoreOptions},
    ollama::{OllamaModel, OllamaModelOptions},
    DocumentStore, LanguageModel, LanguageModelRegistry, NewRecord, RecordStatus, StoredRecord,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What a successful generation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub title: String,
    /// The first 200 characters of the body, with `...` when truncated.
    pub content_preview: String,
    /// Word count of the full body.
    pub word_count: usize,
    pub tags: Vec<String>,
    /// Identifier of the stored record.
    pub record_id: String,
    /// Identifier of the provider that produced the text.
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    pub provider: &'static str,
    pub model_id: String,
    pub available: bool,
    /// Why the provider is unavailable.
    pub detail: Option<String>,
}

/// Health of the providers and the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub gemini: ProviderStatus,
    pub ollama: ProviderStatus,
    pub store: &'static str,
    pub store_connected: bool,
    pub store_detail: Option<String>,
}

impl SystemStatus {
    /// One-line advice on which providers generation will use.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match (self.gemini.available, self.ollama.available) {
            (false, false) => {
                "No AI providers available. Please check your API keys and Ollama installation."
            }
            (false, true) => "Gemini API not available. Content generation will use Ollama only.",
            (true, false) => "Ollama not available. Content generation will use Gemini only.",
            (true, true) => "All AI providers are working correctly!",
        }
    }
}

/// Generates content from a request and stores it.
pub struct ContentAgent {
    registry: LanguageModelRegistry,
    store: Arc<dyn DocumentStore>,
    engine: PromptEngine,
    record_status: RecordStatus,
    max_content_length: usize,
}

impl ContentAgent {
    #[must_use]
    pub fn new(params: AgentParams) -> Self {
        Self {
            registry: params.registry,
            store: params.store,
            engine: params.engine,
            record_status: params.record_status,
            max_content_length: params.max_content_length,
        }
    }

    pub fn builder(
        registry: LanguageModelRegistry,
        store: Arc<dyn DocumentStore>,
    ) -> AgentParams {
        AgentParams::new(registry, store)
    }

    /// Wire Gemini, Ollama and Notion from settings. Fails when the Notion
    /// store cannot be created.
    pub fn from_settings(settings: &Settings) -> Result<Self, ContentError> {
        let gemini = GoogleModel::new(
            DEFAULT_GOOGLE_MODEL,
            GoogleModelOptions {
                api_key: settings.gemini_api_key.clone(),
                ..Default::default()
            },
        );
        let ollama = OllamaModel::new(
            settings.ollama_model.clone(),
            OllamaModelOptions {
                base_url: Some(settings.ollama_base_url.clone()),
                ..Default::default()
            },
        );
        let store = NotionStore::new(NotionStoreOptions {
            token: settings.notion_token.clone(),
            database_id: settings.notion_database_id.clone(),
            ..Default::default()
        })
        .map_err(|err| ContentError::Configuration(err.to_string()))?;

        let registry = LanguageModelRegistry::new(Arc::new(gemini), Arc::new(ollama));
        let agent = Self::new(
            Self::builder(registry, Arc::new(store))
                .max_content_length(settings.max_content_length),
        );
        info!("Content agent initialized");
        Ok(agent)
    }

    #[must_use]
    pub fn engine(&self) -> &PromptEngine {
        &self.engine
    }

    /// Generate and store content from user-supplied strings. See
    /// [`ContentRequest::parse`].
    pub async fn run(
        &self,
        topic: &str,
        content_type: &str,
        provider_name: &str,
        tone: &str,
        length: &str,
    ) -> Result<GenerationSummary, ContentError> {
        let request = ContentRequest::parse(topic, content_type, tone, length)
            .build()
            .map_err(|err| {
                warn!(error = %err, "Rejected content request");
                err
            })?;
        self.run_request(&request, provider_name).await
    }

    /// Render the prompt, generate text, then store the result.
    ///
    /// Nothing is stored when generation fails. Text that was generated but
    /// could not be stored is discarded.
    pub async fn run_request(
        &self,
        request: &ContentRequest,
        provider_name: &str,
    ) -> Result<GenerationSummary, ContentError> {
        trace_run(
            request,
            provider_name,
            self.generate_and_store(request, provider_name),
        )
        .await
    }

    async fn generate_and_store(
        &self,
        request: &ContentRequest,
        provider_name: &str,
    ) -> Result<GenerationSummary, ContentError> {
        info!(
            topic = request.topic(),
            content_type = %request.content_type(),
            "Generating content"
        );

        let prompt = self.engine.render(request)?;
        debug!(prompt_chars = prompt.chars().count(), "Prompt rendered");

        let Some(generated) = self.registry.generate(&prompt, provider_name).await else {
            error!(provider = provider_name, "Failed to generate content");
            return Err(ContentError::GenerationFailed(provider_name.to_string()));
        };

        let body = generated.text;
        let title = extract_title(&body);
        let tags = extract_tags(&body, request.topic());
        let word_count = word_count(&body);

        let record = NewRecord {
            title: title.clone(),
            content: truncate_chars(&body, self.max_content_length).to_string(),
            content_type: request.content_type().display_name().to_string(),
            provider: provider_display_name(generated.provider),
            tags: tags.clone(),
            status: self.record_status,
            word_count,
        };

        let record_id = self.store.create_record(record).await.map_err(|err| {
            error!(store = self.store.name(), error = %err, "Failed to save to store");
            ContentError::PersistenceFailed(err.to_string())
        })?;

        info!(record_id = %record_id, title = %title, "Content saved");

        Ok(GenerationSummary {
            title,
            content_preview: preview(&body, PREVIEW_CHARS),
            word_count,
            tags,
            record_id,
            provider: generated.provider.to_string(),
        })
    }

    /// Up to `limit` stored records, most recent first. Store failures are
    /// logged and yield an empty list.
    pub async fn list_recent(&self, limit: usize) -> Vec<StoredRecord> {
        match self.store.list_recent(limit).await {
            Ok(records) => records,
            Err(err) => {
                error!(store = self.store.name(), error = %err, "Failed to list recent content");
                Vec::new()
            }
        }
    }

    /// Totals over the `limit` most recent records. A store failure yields
    /// empty stats.
    pub async fn library_stats(&self, limit: usize) -> ContentStats {
        ContentStats::from_records(&self.list_recent(limit).await)
    }

    /// Probe both providers and the store. Never fails; problems are
    /// reported in the returned status.
    pub async fn system_status(&self) -> SystemStatus {
        let gemini = provider_status(self.registry.gemini()).await;
        let ollama = provider_status(self.registry.ollama()).await;
        let store_result = self.store.check_connection().await;

        SystemStatus {
            gemini,
            ollama,
            store: self.store.name(),
            store_connected: store_result.is_ok(),
            store_detail: store_result.err().map(|err| err.to_string()),
        }
    }

    #[must_use]
    pub fn suggest(&self, topic: &str, content_type: ContentType) -> ContentSuggestions {
        self.engine.suggest(topic, content_type)
    }
}

async fn provider_status(model: &Arc<dyn LanguageModel>) -> ProviderStatus {
    let result = model.check_availability().await;
    if let Err(err) = &result {
        warn!(provider = model.provider(), error = %err, "Provider unavailable");
    }
    ProviderStatus {
        provider: model.provider(),
        model_id: model.model_id(),
        available: result.is_ok(),
        detail: result.err().map(|err| err.to_string()),
    }
}

/// Name recorded with stored content, e.g. "Gemini".
fn provider_display_name(provider: &str) -> String {
    match provider {
        "gemini" => "Gemini".to_string(),
        "ollama" => "Ollama".to_string(),
        other => other.to_string(),
    }
}
