use crate::domain::entities::lead::SearchHit;
use crate::domain::error::ProviderError;
use crate::domain::values::credentials::Credentials;

/// Web search used for buyer discovery.
#[async_trait::async_trait]
pub trait WebSearch: Send + Sync {
    /// Up to `count` results in ranking order.
    async fn search(
        &self,
        credentials: &Credentials,
        query: &str,
        count: usize,
    ) -> Result<Vec<SearchHit>, ProviderError>;

    fn name(&self) -> &str;
}
