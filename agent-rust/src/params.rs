use crate::{prompt::PromptEngine, settings::DEFAULT_MAX_CONTENT_LENGTH};
use content_sdk::{DocumentStore, LanguageModelRegistry, RecordStatus};
use std::sync::Arc;

/// Parameters required to create a new content agent.
/// # Default Values
/// - `engine`: `PromptEngine::default()`
/// - `record_status`: `RecordStatus::Draft`
/// - `max_content_length`: 2000
pub struct AgentParams {
    /// The text-generation providers and the selection policy between them.
    pub registry: LanguageModelRegistry,
    /// Where generated content is persisted.
    pub store: Arc<dyn DocumentStore>,
    pub engine: PromptEngine,
    /// Status given to newly stored records.
    pub record_status: RecordStatus,
    /// Maximum number of characters of the body that is stored. The word
    /// count always reflects the full body.
    pub max_content_length: usize,
}

impl AgentParams {
    pub fn new(registry: LanguageModelRegistry, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            registry,
            store,
            engine: PromptEngine::default(),
            record_status: RecordStatus::Draft,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }

    /// Set the prompt engine
    #[must_use]
    pub fn engine(mut self, engine: PromptEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Set the status of stored records
    #[must_use]
    pub fn record_status(mut self, record_status: RecordStatus) -> Self {
        self.record_status = record_status;
        self
    }

    /// Set the maximum stored content length, in characters
    #[must_use]
    pub fn max_content_length(mut self, max_content_length: usize) -> Self {
        self.max_content_length = max_content_length;
        self
    }
}
