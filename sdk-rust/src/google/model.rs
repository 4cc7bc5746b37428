use super::api::{Content, GenerateContentParameters, GenerateContentResponse, GenerationConfig, Part};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelResponse, ModelUsage,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use std::time::Duration;

const PROVIDER: &str = "gemini";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub const DEFAULT_GOOGLE_MODEL: &str = "gemini-2.0-flash";

pub struct GoogleModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub client: Option<Client>,
    /// Per-request timeout. Defaults to 120 seconds.
    pub timeout: Option<Duration>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            api_key,
            base_url,
            client,
            timeout,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client: client.unwrap_or_default(),
            timeout: timeout.unwrap_or(Duration::from_secs(120)),
        }
    }

    fn ensure_api_key(&self) -> LanguageModelResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(LanguageModelError::Unavailable(
                PROVIDER,
                "Google Gemini API key is not set".to_string(),
            ));
        }
        Ok(())
    }

    /// The key travels in a header so it never shows up in request URLs.
    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(self.api_key.trim()).map_err(|_| {
            LanguageModelError::InvalidInput(
                "Google Gemini API key contains invalid characters".to_string(),
            )
        })?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        crate::opentelemetry::trace_generate(
            self.provider(),
            &self.model_id(),
            input,
            |input| async move {
                self.ensure_api_key()?;
                let params = convert_to_generate_content_parameters(input)?;

                let url = format!("{}/models/{}:generateContent", self.base_url, self.model_id);

                let response: GenerateContentResponse = client_utils::send_json(
                    &self.client,
                    &url,
                    &params,
                    self.request_headers()?,
                    self.timeout,
                )
                .await?;

                map_generate_content_response(response)
            },
        )
        .await
    }

    async fn check_availability(&self) -> LanguageModelResult<()> {
        self.ensure_api_key()
    }
}

fn convert_to_generate_content_parameters(
    input: LanguageModelInput,
) -> LanguageModelResult<GenerateContentParameters> {
    let LanguageModelInput {
        prompt,
        system_prompt,
        max_tokens,
        temperature,
    } = input;

    if prompt.trim().is_empty() {
        return Err(LanguageModelError::InvalidInput(
            "prompt must not be empty".to_string(),
        ));
    }

    let generation_config = if max_tokens.is_some() || temperature.is_some() {
        Some(GenerationConfig {
            temperature,
            max_output_tokens: max_tokens,
        })
    } else {
        None
    };

    Ok(GenerateContentParameters {
        contents: vec![text_content("user", prompt)],
        system_instruction: system_prompt.map(|text| text_content("system", text)),
        generation_config,
    })
}

fn text_content(role: &str, text: String) -> Content {
    Content {
        parts: Some(vec![Part {
            thought: None,
            text: Some(text),
        }]),
        role: Some(role.to_string()),
    }
}

fn map_generate_content_response(
    response: GenerateContentResponse,
) -> LanguageModelResult<ModelResponse> {
    let candidate = response
        .candidates
        .and_then(|c| c.into_iter().next())
        .ok_or_else(|| {
            LanguageModelError::Invariant(PROVIDER, "No candidate in response".to_string())
        })?;

    // Thought parts are reasoning traces, not content.
    let text = candidate
        .content
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| !part.thought.unwrap_or(false))
        .filter_map(|part| part.text)
        .collect::<String>();

    if text.is_empty() {
        return Err(LanguageModelError::Invariant(
            PROVIDER,
            format!(
                "Candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ),
        ));
    }

    let usage = response.usage_metadata.map(|u| ModelUsage {
        input_tokens: u.prompt_token_count.unwrap_or(0),
        output_tokens: u.candidates_token_count.unwrap_or(0),
    });

    Ok(ModelResponse { text, usage })
}
