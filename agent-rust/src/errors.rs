use crate::request::ContentType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    /// The request was rejected before any external call.
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("No template registered for content type '{0}'")]
    UnsupportedContentType(ContentType),
    #[error("Template render error: {0}")]
    TemplateRender(String),
    /// No provider produced text.
    #[error("Generation failed with provider '{0}'")]
    GenerationFailed(String),
    /// Text was generated but could not be stored. The text is discarded.
    #[error("Persistence failed: {0}")]
    PersistenceFailed(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse dotfile: {0}")]
    Parse(#[from] dotenvy::Error),
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid template file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// Names must be non-empty and made of letters, digits, `-` and `_`.
    #[error("Invalid template name '{0}'")]
    InvalidName(String),
}
