use async_trait::async_trait;

use crate::error::ProviderError;

/// A hosted model that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
