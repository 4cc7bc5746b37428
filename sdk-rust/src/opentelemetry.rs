use crate::{LanguageModelInput, LanguageModelResult, ModelResponse, StoreResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct LmSpan {
    span: Span,
    start_time: Instant,
    prompt_chars: usize,
    output_chars: Option<usize>,
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
}

impl LmSpan {
    pub fn new(provider: &str, model_id: &str, input: &LanguageModelInput) -> Self {
        let span = info_span!("content_sdk.generate");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", model_id.to_string());

        Self {
            span,
            start_time: Instant::now(),
            prompt_chars: input.prompt.chars().count(),
            output_chars: None,
            input_tokens: None,
            output_tokens: None,
            max_tokens: input.max_tokens,
            temperature: input.temperature,
        }
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span.clone()).await
    }

    pub fn on_response(&mut self, response: &ModelResponse) {
        self.output_chars = Some(response.text.chars().count());
        if let Some(usage) = &response.usage {
            self.input_tokens = Some(usage.input_tokens);
            self.output_tokens = Some(usage.output_tokens);
        }
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        self.span
            .set_attribute("content_sdk.prompt_chars", as_i64(self.prompt_chars));
        if let Some(output_chars) = self.output_chars {
            self.span
                .set_attribute("content_sdk.output_chars", as_i64(output_chars));
        }
        if let Some(input_tokens) = self.input_tokens {
            self.span
                .set_attribute("gen_ai.usage.input_tokens", i64::from(input_tokens));
        }
        if let Some(output_tokens) = self.output_tokens {
            self.span
                .set_attribute("gen_ai.usage.output_tokens", i64::from(output_tokens));
        }
        if let Some(max_tokens) = self.max_tokens {
            self.span
                .set_attribute("gen_ai.request.max_tokens", i64::from(max_tokens));
        }
        if let Some(temperature) = self.temperature {
            self.span
                .set_attribute("gen_ai.request.temperature", temperature);
        }
        self.span.set_attribute(
            "content_sdk.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

fn as_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub async fn trace_generate<F, Fut>(
    provider: &str,
    model_id: &str,
    input: LanguageModelInput,
    f: F,
) -> LanguageModelResult<ModelResponse>
where
    F: FnOnce(LanguageModelInput) -> Fut,
    Fut: std::future::Future<Output = LanguageModelResult<ModelResponse>>,
{
    let mut span = LmSpan::new(provider, model_id, &input);
    let result = span.instrument_future(f(input)).await;

    match &result {
        Ok(response) => span.on_response(response),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}

pub async fn trace_store<T, Fut>(store: &str, operation: &str, future: Fut) -> StoreResult<T>
where
    Fut: std::future::Future<Output = StoreResult<T>>,
{
    let span = info_span!("content_sdk.store");
    span.set_attribute("db.system.name", store.to_string());
    span.set_attribute("db.operation.name", operation.to_string());

    let result = future.instrument(span.clone()).await;
    if let Err(error) = &result {
        span.set_attribute("exception.message", error.to_string());
        span.set_status(Status::error(error.to_string()));
    }
    result
}
