mod agent;
mod errors;
mod opentelemetry;
mod params;
pub mod post_process;
pub mod prompt;
pub mod request;
pub mod settings;
mod stats;

pub use agent::{ContentAgent, GenerationSummary, ProviderStatus, SystemStatus};
pub use errors::{CatalogError, ContentError, SettingsError};
pub use params::AgentParams;
pub use prompt::PromptEngine;
pub use request::{ContentRequest, ContentType, Length, Tone};
pub use settings::Settings;
pub use stats::ContentStats;
