use crate::domain::entities::run_report::{DiscoveryOutcome, MarketOutcome, NarrativeOutcome};
use crate::domain::ports::text_generator::TextGenerator;
use crate::domain::values::credentials::Credentials;
use crate::domain::values::language::Language;
use crate::domain::values::market_query::MarketQuery;
use std::sync::Arc;
use tracing::{info, warn};

/// Unit price above which the market is treated as premium (USD/kg).
pub const PREMIUM_THRESHOLD: f64 = 5.0;
/// Unit price below which the market is treated as mass market (USD/kg).
pub const MASS_MARKET_THRESHOLD: f64 = 2.0;

/// Prompt for the market report. The methodology lines are instructions for
/// the model; nothing in this crate enforces them.
pub fn build_prompt(
    language: Language,
    query: &MarketQuery,
    market: &MarketOutcome,
    discovery: &DiscoveryOutcome,
) -> String {
    let lang = language.ai_instruction();
    let product = &query.product_name;
    let country = &query.country_name;
    let data = market.summary();
    let buyers = discovery.buyers_line();

    format!(
        r#"ACT AS: Senior Foreign Trade Analyst.
LANGUAGE: Respond STRICTLY in {lang} language.
TASK: Analyze the market potential for {product} in {country}.
DATA: {data}
Potential Buyers Found: {buyers}

METHODOLOGY:
- Unit price above ${PREMIUM_THRESHOLD:.0}/kg indicates a premium market; below ${MASS_MARKET_THRESHOLD:.0}/kg indicates a mass market.
- If direct data was unavailable, reason from mirror data (partner-reported exports) and flag the data transparency risk.

OUTPUT FORMAT:
1. Verdict (Go/No-Go)
2. Pricing Strategy (Premium vs Mass)
3. Cultural Marketing Tip for {country}
4. Cold Email Subject Line for the buyers found.
"#
    )
}

pub struct NarrativeUseCase {
    generator: Arc<dyn TextGenerator>,
}

impl NarrativeUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generates the report. Errors are caught and returned as
    /// `NarrativeOutcome::Failed` for display.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        model: &str,
        prompt: &str,
    ) -> NarrativeOutcome {
        match self.generator.generate(credentials, model, prompt).await {
            Ok(report) => {
                info!(model, chars = report.len(), "Report generated");
                NarrativeOutcome::Generated { report }
            }
            Err(e) => {
                warn!(provider = self.generator.name(), error = %e, "Report generation failed");
                NarrativeOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::lead::Lead;
    use crate::domain::entities::trade_stats::{TradeRow, TradeStats};

    fn query() -> MarketQuery {
        MarketQuery::new("Hazelnuts", "0802", "276", "Germany")
    }

    #[test]
    fn test_prompt_embeds_language_data_and_buyers() {
        let market = MarketOutcome::from_stats(TradeStats::from_rows(&[TradeRow::new(1_000_000.0, 500_000.0)]));
        let discovery = DiscoveryOutcome::found(vec![
            Lead::new("Nuss Import GmbH".into(), "nuss-import.de".into(), None),
            Lead::new("Trockenfrucht AG".into(), "trockenfrucht.de".into(), None),
        ]);

        let prompt = build_prompt(Language::Tr, &query(), &market, &discovery);

        assert!(prompt.contains("Respond STRICTLY in Turkish language."));
        assert!(prompt.contains("market potential for Hazelnuts in Germany"));
        assert!(prompt.contains("DATA: Total Import: $1,000,000. Unit Price: $2.00/kg."));
        assert!(prompt.contains("Potential Buyers Found: Nuss Import GmbH, Trockenfrucht AG"));
        assert!(prompt.contains("Cultural Marketing Tip for Germany"));
    }

    #[test]
    fn test_prompt_methodology_thresholds() {
        let prompt = build_prompt(
            Language::En,
            &query(),
            &MarketOutcome::from_stats(TradeStats::from_rows(&[])),
            &DiscoveryOutcome::none_found(),
        );
        assert!(prompt.contains("above $5/kg"));
        assert!(prompt.contains("below $2/kg"));
        assert!(prompt.contains("data transparency risk"));
        assert!(prompt.contains("DATA: Direct Data Unavailable. Used Mirror Data logic."));
        assert!(prompt.contains("Potential Buyers Found: \n"));
    }
}
