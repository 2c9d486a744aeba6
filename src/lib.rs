pub mod application;
pub mod cli;
pub mod domain;
pub mod i18n;
pub mod infrastructure;
pub mod web;

use crate::application::lead_discovery::LeadDiscoveryUseCase;
use crate::application::market_stats::MarketStatsUseCase;
use crate::application::narrative::NarrativeUseCase;
use crate::application::run_pipeline::{NoopObserver, RunObserver, RunPipeline, RunRequest, RunSettings};
use crate::domain::entities::run_report::RunReport;
use crate::domain::error::DomainError;
use crate::domain::ports::contact_finder::ContactFinder;
use crate::domain::ports::text_generator::TextGenerator;
use crate::domain::ports::trade_stats_provider::TradeStatsProvider;
use crate::domain::ports::web_search::WebSearch;
use crate::infrastructure::providers::comtrade::ComtradeProvider;
use crate::infrastructure::providers::gemini::GeminiGenerator;
use crate::infrastructure::providers::google_search::{GoogleSearch, MAX_RESULTS};
use crate::infrastructure::providers::http_client;
use crate::infrastructure::providers::hunter::HunterContacts;
use std::sync::Arc;

pub struct Growmarkt {
    pipeline: RunPipeline,
}

impl Growmarkt {
    /// Wires the production providers (Comtrade, Google, Hunter, Gemini).
    /// Credentials are not part of this; each run brings its own.
    pub fn new(settings: RunSettings) -> Self {
        let client = http_client();
        Self::with_providers(
            Arc::new(ComtradeProvider::new(client.clone())),
            Arc::new(GoogleSearch::new(client.clone())),
            Arc::new(HunterContacts::new(client.clone())),
            Arc::new(GeminiGenerator::new(client)),
            settings,
        )
    }

    pub fn with_providers(
        stats: Arc<dyn TradeStatsProvider>,
        search: Arc<dyn WebSearch>,
        contacts: Arc<dyn ContactFinder>,
        generator: Arc<dyn TextGenerator>,
        mut settings: RunSettings,
    ) -> Self {
        settings.max_leads = settings.max_leads.clamp(1, MAX_RESULTS);
        Self {
            pipeline: RunPipeline::new(
                MarketStatsUseCase::new(stats),
                LeadDiscoveryUseCase::new(search, contacts),
                NarrativeUseCase::new(generator),
                settings,
            ),
        }
    }

    pub fn settings(&self) -> &RunSettings {
        self.pipeline.settings()
    }

    pub async fn run(&self, request: &RunRequest) -> Result<RunReport, DomainError> {
        self.pipeline.execute(request, &NoopObserver).await
    }

    pub async fn run_observed(
        &self,
        request: &RunRequest,
        observer: &dyn RunObserver,
    ) -> Result<RunReport, DomainError> {
        self.pipeline.execute(request, observer).await
    }
}
