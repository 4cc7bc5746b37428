use super::api::{GenerateOptions, GenerateRequest, GenerateResponse, TagsResponse};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelResponse, ModelUsage,
};
use reqwest::{header::HeaderMap, Client};
use std::time::Duration;

const PROVIDER: &str = "ollama";

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";

/// A model served by a local Ollama daemon.
pub struct OllamaModel {
    model_id: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

#[derive(Clone, Default)]
pub struct OllamaModelOptions {
    pub base_url: Option<String>,
    pub client: Option<Client>,
    /// Per-request timeout. Defaults to 60 seconds.
    pub timeout: Option<Duration>,
}

impl OllamaModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OllamaModelOptions) -> Self {
        let OllamaModelOptions {
            base_url,
            client,
            timeout,
        } = options;

        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            model_id: model_id.into(),
            base_url,
            client: client.unwrap_or_default(),
            timeout: timeout.unwrap_or(Duration::from_secs(60)),
        }
    }

    /// Names of the models pulled into the local daemon.
    pub async fn list_local_models(&self) -> LanguageModelResult<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let tags: TagsResponse =
            client_utils::get_json(&self.client, &url, HeaderMap::new(), self.timeout).await?;
        Ok(tags.models.into_iter().map(|model| model.name).collect())
    }
}

#[async_trait::async_trait]
impl LanguageModel for OllamaModel {
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
                let request = convert_to_generate_request(&self.model_id, input)?;
                let url = format!("{}/api/generate", self.base_url);

                let response: GenerateResponse = client_utils::send_json(
                    &self.client,
                    &url,
                    &request,
                    HeaderMap::new(),
                    self.timeout,
                )
                .await?;

                Ok::<_, LanguageModelError>(map_generate_response(response))
            },
        )
        .await
    }

    async fn check_availability(&self) -> LanguageModelResult<()> {
        self.list_local_models().await.map(|_| ()).map_err(|error| {
            LanguageModelError::Unavailable(PROVIDER, format!("Ollama not available: {error}"))
        })
    }
}

fn convert_to_generate_request(
    model_id: &str,
    input: LanguageModelInput,
) -> LanguageModelResult<GenerateRequest> {
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

    let options = if max_tokens.is_some() || temperature.is_some() {
        Some(GenerateOptions {
            temperature,
            num_predict: max_tokens,
        })
    } else {
        None
    };

    Ok(GenerateRequest {
        model: model_id.to_string(),
        prompt,
        system: system_prompt,
        stream: false,
        options,
    })
}

fn map_generate_response(response: GenerateResponse) -> ModelResponse {
    let usage = match (response.prompt_eval_count, response.eval_count) {
        (None, None) => None,
        (input, output) => Some(ModelUsage {
            input_tokens: input.unwrap_or(0),
            output_tokens: output.unwrap_or(0),
        }),
    };

    ModelResponse {
        text: response.response,
        usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_non_streaming_request() {
        let request =
            convert_to_generate_request("llama3.1", LanguageModelInput::new("Hello")).expect("ok");

        assert_eq!(
            serde_json::to_value(&request).expect("serializable"),
            json!({ "model": "llama3.1", "prompt": "Hello", "stream": false })
        );
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let model = OllamaModel::new(
            DEFAULT_OLLAMA_MODEL,
            OllamaModelOptions {
                base_url: Some("   ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(model.base_url, DEFAULT_OLLAMA_BASE_URL);
    }

    #[test]
    fn maps_eval_counts_to_usage() {
        let response = map_generate_response(GenerateResponse {
            response: "Hi".to_string(),
            done: true,
            prompt_eval_count: Some(3),
            eval_count: None,
        });
        assert_eq!(
            response.usage,
            Some(ModelUsage {
                input_tokens: 3,
                output_tokens: 0
            })
        );
    }
}
