use crate::domain::error::ProviderError;
use crate::domain::values::credentials::Credentials;

/// Looks up a public contact email for a company domain.
#[async_trait::async_trait]
pub trait ContactFinder: Send + Sync {
    /// `Ok(None)` when the provider knows no address for the domain.
    async fn find_email(
        &self,
        credentials: &Credentials,
        domain: &str,
    ) -> Result<Option<String>, ProviderError>;

    fn name(&self) -> &str;
}
