use crate::application::lead_discovery::LeadDiscoveryUseCase;
use crate::application::market_stats::MarketStatsUseCase;
use crate::application::narrative::{build_prompt, NarrativeUseCase};
use crate::domain::entities::run_report::{DiscoveryOutcome, MarketOutcome, NarrativeOutcome, RunReport};
use crate::domain::error::DomainError;
use crate::domain::values::credentials::Credentials;
use crate::domain::values::language::Language;
use crate::domain::values::market_query::MarketQuery;
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn, Instrument};

/// Stages of one run. A run walks them in order and ends back in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    CredentialCheck,
    MarketPhase,
    DiscoveryPhase,
    NarrativePhase,
}

impl RunState {
    pub fn next(self) -> RunState {
        match self {
            RunState::Idle => RunState::CredentialCheck,
            RunState::CredentialCheck => RunState::MarketPhase,
            RunState::MarketPhase => RunState::DiscoveryPhase,
            RunState::DiscoveryPhase => RunState::NarrativePhase,
            RunState::NarrativePhase => RunState::Idle,
        }
    }
}

/// Progress notifications, emitted as soon as each piece is known.
#[derive(Debug)]
pub enum RunEvent<'a> {
    Entered(RunState),
    MarketDone(&'a MarketOutcome),
    DiscoveryDone(&'a DiscoveryOutcome),
    NarrativeDone(&'a NarrativeOutcome),
}

/// Receives run progress, e.g. to render each phase as it finishes.
pub trait RunObserver: Send + Sync {
    fn on_event(&self, event: &RunEvent<'_>);
}

pub struct NoopObserver;

impl RunObserver for NoopObserver {
    fn on_event(&self, _event: &RunEvent<'_>) {}
}

/// Fixed parameters shared by every run of a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Statistics year
    pub period: String,
    /// Generative model name
    pub model: String,
    /// Number of search results turned into leads
    pub max_leads: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            period: "2023".into(),
            model: "gemini-1.5-flash".into(),
            max_leads: 5,
        }
    }
}

/// One submission: credentials, query and output language.
#[derive(Debug, Clone, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub language: Language,
    #[serde(flatten)]
    pub query: MarketQuery,
    #[serde(flatten)]
    pub credentials: Credentials,
}

pub struct RunPipeline {
    market_uc: MarketStatsUseCase,
    discovery_uc: LeadDiscoveryUseCase,
    narrative_uc: NarrativeUseCase,
    settings: RunSettings,
}

impl RunPipeline {
    pub fn new(
        market_uc: MarketStatsUseCase,
        discovery_uc: LeadDiscoveryUseCase,
        narrative_uc: NarrativeUseCase,
        settings: RunSettings,
    ) -> Self {
        Self {
            market_uc,
            discovery_uc,
            narrative_uc,
            settings,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Runs every phase in order. Only a missing credential stops the run,
    /// and it does so before any provider is called; every other failure is
    /// folded into that phase's outcome.
    pub async fn execute(
        &self,
        request: &RunRequest,
        observer: &dyn RunObserver,
    ) -> Result<RunReport, DomainError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("run", %run_id, language = %request.language);
        self.execute_inner(run_id, request, observer).instrument(span).await
    }

    async fn execute_inner(
        &self,
        run_id: String,
        request: &RunRequest,
        observer: &dyn RunObserver,
    ) -> Result<RunReport, DomainError> {
        let started_at = Utc::now();
        let creds = &request.credentials;
        let query = &request.query;

        let mut state = RunState::Idle.next();
        observer.on_event(&RunEvent::Entered(state));
        if let Err(e) = creds.check() {
            warn!(error = %e, "Run rejected");
            return Err(e);
        }

        state = state.next();
        observer.on_event(&RunEvent::Entered(state));
        info!(product = %query.product_name, hs_code = %query.hs_code, country = %query.country_code, "Market phase");
        let market = self.market_uc.execute(creds, query, &self.settings.period).await;
        observer.on_event(&RunEvent::MarketDone(&market));

        state = state.next();
        observer.on_event(&RunEvent::Entered(state));
        info!("Discovery phase");
        let discovery = self.discovery_uc.execute(creds, query, self.settings.max_leads).await;
        observer.on_event(&RunEvent::DiscoveryDone(&discovery));

        state = state.next();
        observer.on_event(&RunEvent::Entered(state));
        info!(model = %self.settings.model, "Narrative phase");
        let prompt = build_prompt(request.language, query, &market, &discovery);
        let narrative = self.narrative_uc.execute(creds, &self.settings.model, &prompt).await;
        observer.on_event(&RunEvent::NarrativeDone(&narrative));

        state = state.next();
        debug_assert_eq!(state, RunState::Idle);
        info!(market_ok = market.is_success(), leads = discovery.leads.len(), "Run complete");

        Ok(RunReport {
            run_id,
            language: request.language,
            query: query.clone(),
            market,
            discovery,
            narrative,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
