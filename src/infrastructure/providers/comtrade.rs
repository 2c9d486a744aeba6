use super::ensure_success;
use crate::domain::entities::trade_stats::TradeRow;
use crate::domain::error::ProviderError;
use crate::domain::ports::trade_stats_provider::{ImportStatsRequest, TradeStatsProvider};
use crate::domain::values::credentials::Credentials;
use async_trait::async_trait;
use tracing::debug;

/// UN Comtrade final-data API: annual (`A`) commodity (`C`) HS statistics.
pub struct ComtradeProvider {
    base_url: String,
    client: reqwest::Client,
}

impl ComtradeProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            base_url: "https://comtradeapi.un.org/data/v1/get/C/A/HS".into(),
            client,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ComtradeResponse {
    #[serde(default)]
    data: Option<Vec<TradeRow>>,
    #[serde(default)]
    error: Option<String>,
}

/// Rows of a provider response. A missing `data` array means no record.
fn parse_rows(body: &str) -> Result<Vec<TradeRow>, ProviderError> {
    let resp: ComtradeResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if let Some(err) = resp.error.filter(|e| !e.trim().is_empty()) {
        return Err(ProviderError::Parse(format!("Comtrade error: {err}")));
    }

    Ok(resp.data.unwrap_or_default())
}

#[async_trait]
impl TradeStatsProvider for ComtradeProvider {
    async fn fetch_imports(
        &self,
        credentials: &Credentials,
        request: &ImportStatsRequest,
    ) -> Result<Vec<TradeRow>, ProviderError> {
        debug!(
            reporter = %request.reporter_code,
            commodity = %request.commodity_code,
            period = %request.period,
            "Querying Comtrade"
        );

        // No partnerCode: totals across all partners.
        let resp = self
            .client
            .get(&self.base_url)
            .header("Ocp-Apim-Subscription-Key", &credentials.comtrade_key)
            .query(&[
                ("reporterCode", request.reporter_code.as_str()),
                ("period", request.period.as_str()),
                ("cmdCode", request.commodity_code.as_str()),
                ("flowCode", "M"),
            ])
            .send()
            .await?;

        let body = ensure_success("Comtrade", resp).await?.text().await?;
        parse_rows(&body)
    }

    fn name(&self) -> &str {
        "un_comtrade"
    }
}
