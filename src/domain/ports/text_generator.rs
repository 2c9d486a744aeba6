use crate::domain::error::ProviderError;
use crate::domain::values::credentials::Credentials;

/// Generative text model that writes the market report.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        credentials: &Credentials,
        model: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;

    fn name(&self) -> &str;
}
