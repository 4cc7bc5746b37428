//! Format checks for user-supplied settings.
//!
//! These only check shape; a well-formed key may still be rejected by the
//! provider.

use super::SettingKey;
use std::collections::BTreeMap;

const VALID: &str = "Valid format";

/// Outcome of checking a single setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: &'static str,
}

impl FieldValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: VALID,
        }
    }

    fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

#[must_use]
pub fn validate_gemini_api_key(api_key: &str) -> FieldValidation {
    if api_key.is_empty() {
        FieldValidation::invalid("API key is required")
    } else if !api_key.starts_with("AIza") {
        FieldValidation::invalid("Gemini API key should start with 'AIza'")
    } else if api_key.chars().count() < 30 {
        FieldValidation::invalid("API key appears to be too short")
    } else {
        FieldValidation::ok()
    }
}

#[must_use]
pub fn validate_notion_token(token: &str) -> FieldValidation {
    if token.is_empty() {
        FieldValidation::invalid("Notion token is required")
    } else if !token.starts_with("secret_") && !token.starts_with("ntn_") {
        FieldValidation::invalid("Notion token should start with 'secret_' or 'ntn_'")
    } else if token.chars().count() < 40 {
        FieldValidation::invalid("Token appears to be too short")
    } else {
        FieldValidation::ok()
    }
}

/// Accepts 32 lowercase hex digits, with or without hyphens.
#[must_use]
pub fn validate_notion_database_id(database_id: &str) -> FieldValidation {
    if database_id.is_empty() {
        return FieldValidation::invalid("Database ID is required");
    }

    let clean_id = database_id.replace('-', "");
    if clean_id.chars().count() != 32 {
        FieldValidation::invalid("Database ID should be 32 characters (with or without hyphens)")
    } else if !clean_id
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        FieldValidation::invalid("Database ID should contain only hexadecimal characters")
    } else {
        FieldValidation::ok()
    }
}

#[must_use]
pub fn validate_ollama_url(url: &str) -> FieldValidation {
    if url.is_empty() {
        FieldValidation::invalid("Ollama URL is required")
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        FieldValidation::invalid("URL should start with http:// or https://")
    } else {
        FieldValidation::ok()
    }
}

#[must_use]
pub fn validate_ollama_model(model: &str) -> FieldValidation {
    if model.is_empty() {
        FieldValidation::invalid("Model name is required")
    } else if model.trim().chars().count() < 2 {
        FieldValidation::invalid("Model name is too short")
    } else {
        FieldValidation::ok()
    }
}

#[must_use]
pub fn validate(key: SettingKey, value: &str) -> FieldValidation {
    match key {
        SettingKey::GeminiApiKey => validate_gemini_api_key(value),
        SettingKey::NotionToken => validate_notion_token(value),
        SettingKey::NotionDatabaseId => validate_notion_database_id(value),
        SettingKey::OllamaBaseUrl => validate_ollama_url(value),
        SettingKey::OllamaModel => validate_ollama_model(value),
    }
}

/// Validate the settings present in `values`, keyed by field name. Absent
/// settings are not reported.
#[must_use]
pub fn validate_all(values: &BTreeMap<String, String>) -> Vec<(SettingKey, FieldValidation)> {
    SettingKey::all()
        .into_iter()
        .filter_map(|key| {
            values
                .get(key.field_name())
                .map(|value| (key, validate(key, value)))
        })
        .collect()
}

/// Whether every result is valid, plus a "Field Name: message" line for each
/// failure.
#[must_use]
pub fn validation_summary(results: &[(SettingKey, FieldValidation)]) -> (bool, Vec<String>) {
    let errors: Vec<String> = results
        .iter()
        .filter(|(_, result)| !result.valid)
        .map(|(key, result)| format!("{}: {}", title_case(key.field_name()), result.message))
        .collect();
    (errors.is_empty(), errors)
}

/// "notion_database_id" -> "Notion Database Id"
fn title_case(field_name: &str) -> String {
    field_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
