use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input to a single, non-streaming text generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageModelInput {
    /// The fully rendered prompt.
    pub prompt: String,
    /// Optional system instruction sent alongside the prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    /// The maximum number of tokens that can be generated in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Amount of randomness injected into the response. Ranges from 0.0 to 1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl LanguageModelInput {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ModelUsage>,
}

impl ModelResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// Editorial status of a stored record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Draft,
    Review,
    Published,
}

impl RecordStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Review => "Review",
            Self::Published => "Published",
        }
    }
}

/// Fields of a record to be created in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub title: String,
    /// Body as it should be stored. Callers truncate it to the store's
    /// limit before handing it over.
    pub content: String,
    /// Display name of the content type, e.g. "Blog".
    pub content_type: String,
    /// Display name of the provider that produced the content.
    pub provider: String,
    pub tags: Vec<String>,
    pub status: RecordStatus,
    /// Word count of the full, untruncated body.
    pub word_count: usize,
}

/// A record read back from the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: String,
    pub title: String,
    /// Status name as stored, "Unknown" when unset.
    pub status: String,
    pub content_type: String,
    pub word_count: Option<u64>,
    pub provider: String,
    pub created_time: Option<DateTime<Utc>>,
}
