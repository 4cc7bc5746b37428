//! Runtime configuration read from the environment and a dotfile.
//!
//! A [`Settings`] value is a snapshot. Updating or reloading produces a new
//! value; holders of the old one are unaffected.

pub mod validate;

use crate::{request::ContentType, SettingsError};
use std::{collections::BTreeMap, fs, io, path::Path};
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 2000;

/// A setting that can be supplied through the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    GeminiApiKey,
    NotionToken,
    NotionDatabaseId,
    OllamaBaseUrl,
    OllamaModel,
}

impl SettingKey {
    /// Field name and environment variable name in a single lookup
    fn metadata(self) -> (&'static str, &'static str) {
        match self {
            Self::GeminiApiKey => ("gemini_api_key", "GEMINI_API_KEY"),
            Self::NotionToken => ("notion_token", "NOTION_API_KEY"),
            Self::NotionDatabaseId => ("notion_database_id", "NOTION_DATABASE_ID"),
            Self::OllamaBaseUrl => ("ollama_base_url", "OLLAMA_BASE_URL"),
            Self::OllamaModel => ("ollama_model", "OLLAMA_MODEL"),
        }
    }

    #[must_use]
    pub fn field_name(self) -> &'static str {
        self.metadata().0
    }

    #[must_use]
    pub fn env_name(self) -> &'static str {
        self.metadata().1
    }

    #[must_use]
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.field_name() == name)
    }

    #[must_use]
    pub fn from_env_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.env_name() == name)
    }

    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::GeminiApiKey,
            Self::NotionToken,
            Self::NotionDatabaseId,
            Self::OllamaBaseUrl,
            Self::OllamaModel,
        ]
    }
}

/// Configuration for the content agent.
/// # Default Values
/// - `gemini_api_key`, `notion_token`, `notion_database_id`: `""`
/// - `ollama_base_url`: `"http://localhost:11434"`
/// - `ollama_model`: `"llama3.1"`
/// - `max_content_length`: 2000
/// - `default_content_type`: `ContentType::Blog`
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub gemini_api_key: String,
    pub notion_token: String,
    pub notion_database_id: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    /// Maximum number of characters of generated content that is stored.
    pub max_content_length: usize,
    pub default_content_type: ContentType,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            notion_token: String::new(),
            notion_database_id: String::new(),
            ollama_base_url: content_sdk::ollama::DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: content_sdk::ollama::DEFAULT_OLLAMA_MODEL.to_string(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            default_content_type: ContentType::Blog,
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("notion_token", &redact(&self.notion_token))
            .field("notion_database_id", &self.notion_database_id)
            .field("ollama_base_url", &self.ollama_base_url)
            .field("ollama_model", &self.ollama_model)
            .field("max_content_length", &self.max_content_length)
            .field("default_content_type", &self.default_content_type)
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl Settings {
    /// Read settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Read the process environment, then let entries of `dotfile` override
    /// it. A missing dotfile is not an error.
    pub fn load(dotfile: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_env().with_dotfile(dotfile.as_ref())
    }

    /// Re-read the environment and `dotfile` into a new snapshot. Settings
    /// that are not backed by the environment carry over from `self`.
    pub fn reload(&self, dotfile: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings = Self {
            max_content_length: self.max_content_length,
            default_content_type: self.default_content_type,
            ..Self::load(dotfile)?
        };
        info!("Settings reloaded");
        Ok(settings)
    }

    /// A copy with the given values applied. Keys are field names such as
    /// `ollama_model`; unknown keys and empty values are ignored.
    #[must_use]
    pub fn update(&self, values: &BTreeMap<String, String>) -> Self {
        let mut settings = self.clone();
        for (name, value) in values {
            if value.is_empty() {
                continue;
            }
            match name.as_str() {
                "max_content_length" => match value.trim().parse() {
                    Ok(length) => settings.max_content_length = length,
                    Err(_) => warn!(value = %value, "Ignoring invalid max_content_length"),
                },
                "default_content_type" => match value.parse() {
                    Ok(content_type) => settings.default_content_type = content_type,
                    Err(err) => warn!(error = %err, "Ignoring invalid default_content_type"),
                },
                other => match SettingKey::from_field_name(other) {
                    Some(key) => settings.set(key, value.clone()),
                    None => debug!(key = other, "Ignoring unknown setting"),
                },
            }
        }
        settings
    }

    #[must_use]
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::GeminiApiKey => &self.gemini_api_key,
            SettingKey::NotionToken => &self.notion_token,
            SettingKey::NotionDatabaseId => &self.notion_database_id,
            SettingKey::OllamaBaseUrl => &self.ollama_base_url,
            SettingKey::OllamaModel => &self.ollama_model,
        }
    }

    /// Environment names of required settings that are unset.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            SettingKey::GeminiApiKey,
            SettingKey::NotionToken,
            SettingKey::NotionDatabaseId,
        ]
        .into_iter()
        .filter(|key| self.get(*key).is_empty())
        .map(SettingKey::env_name)
        .collect()
    }

    fn set(&mut self, key: SettingKey, value: String) {
        match key {
            SettingKey::GeminiApiKey => self.gemini_api_key = value,
            SettingKey::NotionToken => self.notion_token = value,
            SettingKey::NotionDatabaseId => self.notion_database_id = value,
            SettingKey::OllamaBaseUrl => self.ollama_base_url = value,
            SettingKey::OllamaModel => self.ollama_model = value,
        }
    }

    fn with_env(mut self) -> Self {
        for key in SettingKey::all() {
            if let Ok(value) = std::env::var(key.env_name()) {
                self.set(key, value);
            }
        }
        self
    }

    fn with_dotfile(mut self, dotfile: &Path) -> Result<Self, SettingsError> {
        let entries = match dotenvy::from_path_iter(dotfile) {
            Ok(entries) => entries,
            Err(err) if err.not_found() => {
                debug!(path = %dotfile.display(), "No dotfile found");
                return Ok(self);
            }
            Err(err) => return Err(err.into()),
        };

        for entry in entries {
            let (name, value) = entry?;
            if let Some(key) = SettingKey::from_env_name(&name) {
                self.set(key, value);
            }
        }
        Ok(self)
    }
}

/// Persist values to a dotfile. Keys are field names such as
/// `gemini_api_key`.
///
/// Existing `KEY=` lines are rewritten in place and new keys are appended;
/// comments and unrelated lines are kept. Empty values and keys that are
/// not environment-backed are skipped. Values that contain line breaks are
/// rejected before anything is written.
pub fn save_to_dotfile(
    path: impl AsRef<Path>,
    values: &BTreeMap<String, String>,
) -> Result<(), SettingsError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| SettingsError::Io {
        path: path.display().to_string(),
        source,
    };

    let existing = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(io_error(err)),
    };
    let mut lines: Vec<String> = existing.lines().map(ToString::to_string).collect();

    let updates: Vec<(&str, &String)> = SettingKey::all()
        .into_iter()
        .filter_map(|key| {
            values
                .get(key.field_name())
                .filter(|value| !value.is_empty())
                .map(|value| (key.env_name(), value))
        })
        .collect();

    if let Some((env_name, _)) = updates
        .iter()
        .find(|(_, value)| value.contains(['\n', '\r']))
    {
        return Err(SettingsError::InvalidValue {
            key: (*env_name).to_string(),
            reason: "line breaks are not allowed".to_string(),
        });
    }

    for (env_name, value) in updates {
        let new_line = format!("{env_name}={}", dotfile_value(value));
        let existing_line = lines.iter_mut().find(|line| {
            !line.trim_start().starts_with('#')
                && line
                    .split_once('=')
                    .is_some_and(|(name, _)| name.trim() == env_name)
        });
        match existing_line {
            Some(line) => *line = new_line,
            None => lines.push(new_line),
        }
    }

    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).map_err(io_error)?;
    info!(path = %path.display(), "Settings saved");
    Ok(())
}

/// Render a value so that dotenvy reads it back unchanged. Plain values are
/// written as is. Anything else goes in single quotes, with `'` and `\`
/// escaped outside the quotes since dotenvy treats a backslash inside them
/// as an escape when finding the end of the line.
fn dotfile_value(value: &str) -> String {
    let plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_-.:/@%+,".contains(c));
    if plain {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str(r"'\''"),
            '\\' => quoted.push_str(r"'\\'"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ollama_base_url, "http://localhost:11434");
        assert_eq!(settings.ollama_model, "llama3.1");
        assert_eq!(settings.max_content_length, 2000);
        assert_eq!(settings.default_content_type, ContentType::Blog);
    }

    #[test]
    fn update_returns_new_snapshot() {
        let original = Settings::default();
        let updated = original.update(&values(&[
            ("ollama_model", "mistral"),
            ("max_content_length", "1500"),
        ]));

        assert_eq!(updated.ollama_model, "mistral");
        assert_eq!(updated.max_content_length, 1500);
        assert_eq!(original.ollama_model, "llama3.1");
    }

    #[test]
    fn update_skips_empty_and_unknown() {
        let original = Settings::default();
        let updated = original.update(&values(&[("ollama_model", ""), ("theme", "dark")]));
        assert_eq!(updated, original);
    }

    #[test]
    fn update_ignores_unparsable_values() {
        let updated = Settings::default().update(&values(&[
            ("max_content_length", "lots"),
            ("default_content_type", "podcast"),
        ]));
        assert_eq!(updated, Settings::default());
    }

    #[test]
    fn reports_missing_required() {
        let settings = Settings {
            notion_token: "secret_abc".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            settings.missing_required(),
            ["GEMINI_API_KEY", "NOTION_DATABASE_ID"]
        );
    }

    #[test]
    fn dotfile_overrides_values() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# local overrides").expect("write");
        writeln!(file, "OLLAMA_MODEL=phi3").expect("write");
        writeln!(file, "UNRELATED=1").expect("write");

        let settings = Settings::default()
            .with_dotfile(file.path())
            .expect("loads");
        assert_eq!(settings.ollama_model, "phi3");
    }

    #[test]
    fn missing_dotfile_is_not_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let settings = Settings::default()
            .with_dotfile(&dir.path().join(".env"))
            .expect("loads");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reload_keeps_local_settings() {
        let dir = tempfile::tempdir().expect("temp dir");
        let current = Settings {
            max_content_length: 500,
            ..Settings::default()
        };
        let reloaded = current.reload(dir.path().join(".env")).expect("reloads");
        assert_eq!(reloaded.max_content_length, 500);
    }

    #[test]
    fn saves_in_place_and_appends() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".env");
        fs::write(&path, "# keys\nGEMINI_API_KEY=old\nOTHER=keep\n").expect("write");

        save_to_dotfile(
            &path,
            &values(&[
                ("gemini_api_key", "AIzaNew"),
                ("ollama_model", "mistral"),
                ("notion_token", ""),
                ("theme", "dark"),
            ]),
        )
        .expect("saves");

        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "# keys\nGEMINI_API_KEY=AIzaNew\nOTHER=keep\nOLLAMA_MODEL=mistral\n"
        );
    }

    #[test]
    fn saving_creates_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".env");

        save_to_dotfile(&path, &values(&[("notion_database_id", "abc")])).expect("saves");

        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "NOTION_DATABASE_ID=abc\n"
        );
        let loaded = Settings::default().with_dotfile(&path).expect("loads");
        assert_eq!(loaded.notion_database_id, "abc");
    }

    #[test]
    fn saved_values_load_back_unchanged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".env");
        let model = "my model #2";
        let url = "http://localhost:11434/?a=$HOME&b=\"x\"";
        let token = r"it's a \ token\' ending in \";

        save_to_dotfile(
            &path,
            &values(&[
                ("ollama_model", model),
                ("ollama_base_url", url),
                ("notion_token", token),
            ]),
        )
        .expect("saves");

        let loaded = Settings::default().with_dotfile(&path).expect("loads");
        assert_eq!(loaded.ollama_model, model);
        assert_eq!(loaded.ollama_base_url, url);
        assert_eq!(loaded.notion_token, token);

        save_to_dotfile(&path, &values(&[("ollama_model", "phi3 mini")])).expect("saves");
        let reloaded = Settings::default().with_dotfile(&path).expect("loads");
        assert_eq!(reloaded.ollama_model, "phi3 mini");
        assert_eq!(reloaded.notion_token, token);
    }

    #[test]
    fn saving_rejects_line_breaks() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(".env");
        fs::write(&path, "OLLAMA_MODEL=phi3\n").expect("write");

        let result = save_to_dotfile(
            &path,
            &values(&[
                ("ollama_model", "mistral"),
                ("gemini_api_key", "AIza\nNOTION_API_KEY=injected"),
            ]),
        );

        assert!(matches!(
            result,
            Err(SettingsError::InvalidValue { ref key, .. }) if key == "GEMINI_API_KEY"
        ));
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "OLLAMA_MODEL=phi3\n"
        );
    }
}
