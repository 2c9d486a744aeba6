use crate::domain::entities::trade_stats::TradeRow;
use crate::domain::error::ProviderError;
use crate::domain::values::credentials::Credentials;

/// Parameters of one annual import lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatsRequest {
    /// Reporting country, numeric code (e.g. "276")
    pub reporter_code: String,
    /// HS commodity code (e.g. "0802")
    pub commodity_code: String,
    /// Year, e.g. "2023"
    pub period: String,
}

/// Source of annual import statistics (UN Comtrade in production).
#[async_trait::async_trait]
pub trait TradeStatsProvider: Send + Sync {
    /// Import rows for the reporter/commodity/period. An empty vector means
    /// the provider has no direct record.
    async fn fetch_imports(
        &self,
        credentials: &Credentials,
        request: &ImportStatsRequest,
    ) -> Result<Vec<TradeRow>, ProviderError>;

    fn name(&self) -> &str;
}
