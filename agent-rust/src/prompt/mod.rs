//! Prompt construction: templates, modifiers and suggestions.

pub mod catalog;
mod engine;
mod instructions;
pub mod modifiers;
mod suggestions;
mod templates;

pub use catalog::{CustomTemplate, CustomTemplateStore, IndustryProfile};
pub use engine::PromptEngine;
pub use instructions::InstructionParam;
pub use modifiers::{AudienceCategory, PromptModifiers, SeoLevel};
pub use suggestions::{marketing_frameworks, structures_for, ContentStructure, ContentSuggestions};
pub use templates::{render_template, TemplateSet};
