use crate::{LanguageModelInput, LanguageModelResult, ModelResponse};

#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse>;
    /// Check that the provider can serve requests. Implementations that
    /// cannot probe cheaply accept by default.
    async fn check_availability(&self) -> LanguageModelResult<()> {
        Ok(())
    }
}
