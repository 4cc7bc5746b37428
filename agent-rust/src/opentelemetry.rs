use crate::{request::ContentRequest, ContentError, GenerationSummary};
use opentelemetry::trace::Status;
use std::future::Future;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct RunSpan {
    span: Span,
}

impl RunSpan {
    pub fn new(request: &ContentRequest, provider_name: &str) -> Self {
        let span = info_span!("content_agent.run");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute(
            "content_agent.content_type",
            request.content_type().as_str(),
        );
        span.set_attribute("content_agent.tone", request.tone().as_str());
        span.set_attribute("content_agent.length", request.length().as_str());
        span.set_attribute("content_agent.requested_provider", provider_name.to_string());
        Self { span }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn on_summary(&self, summary: &GenerationSummary) {
        self.span
            .set_attribute("content_agent.provider", summary.provider.clone());
        self.span
            .set_attribute("content_agent.record_id", summary.record_id.clone());
        self.span.set_attribute(
            "content_agent.word_count",
            i64::try_from(summary.word_count).unwrap_or(i64::MAX),
        );
    }

    pub fn on_error(&self, error: &ContentError) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }
}

pub async fn trace_run<Fut>(
    request: &ContentRequest,
    provider_name: &str,
    future: Fut,
) -> Result<GenerationSummary, ContentError>
where
    Fut: Future<Output = Result<GenerationSummary, ContentError>> + Send,
{
    let span = RunSpan::new(request, provider_name);
    let result = future.instrument(span.span()).await;

    match &result {
        Ok(summary) => span.on_summary(summary),
        Err(error) => span.on_error(error),
    }

    result
}
