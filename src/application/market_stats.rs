use crate::domain::entities::run_report::MarketOutcome;
use crate::domain::entities::trade_stats::TradeStats;
use crate::domain::ports::trade_stats_provider::{ImportStatsRequest, TradeStatsProvider};
use crate::domain::values::credentials::Credentials;
use crate::domain::values::market_query::MarketQuery;
use std::sync::Arc;
use tracing::{info, warn};

pub struct MarketStatsUseCase {
    provider: Arc<dyn TradeStatsProvider>,
}

impl MarketStatsUseCase {
    pub fn new(provider: Arc<dyn TradeStatsProvider>) -> Self {
        Self { provider }
    }

    /// One statistics lookup reduced to totals. Never fails: provider errors
    /// become `MarketOutcome::Failed` so later phases still run.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        query: &MarketQuery,
        period: &str,
    ) -> MarketOutcome {
        let request = ImportStatsRequest {
            reporter_code: query.country_code.clone(),
            commodity_code: query.hs_code.clone(),
            period: period.to_string(),
        };

        match self.provider.fetch_imports(credentials, &request).await {
            Ok(rows) => {
                let stats = TradeStats::from_rows(&rows);
                let outcome = MarketOutcome::from_stats(stats);
                if outcome.is_success() {
                    info!(
                        rows = rows.len(),
                        total_value = stats.total_value,
                        unit_price = stats.unit_price,
                        "Market data retrieved"
                    );
                } else {
                    warn!(rows = rows.len(), "No direct import data, using mirror data note");
                }
                outcome
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Market data fetch failed");
                MarketOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
