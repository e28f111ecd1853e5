use async_trait::async_trait;

use crate::error::AiError;

/// External text-generation collaborator.
///
/// One prompt and a model name in, plain text out. Implementations perform a
/// single request per call: no retries, streaming or queuing.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AiError>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for std::sync::Arc<T> {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AiError> {
        (**self).generate(model, prompt).await
    }
}
