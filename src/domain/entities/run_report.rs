use crate::domain::entities::lead::Lead;
use crate::domain::entities::trade_stats::TradeStats;
use crate::domain::values::language::Language;
use crate::domain::values::market_query::MarketQuery;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of the market statistics phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketOutcome {
    /// Direct import data was found.
    Retrieved { stats: TradeStats },
    /// No usable rows; the report falls back to mirror-data reasoning.
    MirrorFallback { stats: TradeStats },
    /// The provider call failed.
    Failed { error: String },
}

impl MarketOutcome {
    pub fn from_stats(stats: TradeStats) -> Self {
        if stats.data_available {
            MarketOutcome::Retrieved { stats }
        } else {
            MarketOutcome::MirrorFallback { stats }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MarketOutcome::Retrieved { .. })
    }

    pub fn stats(&self) -> Option<&TradeStats> {
        match self {
            MarketOutcome::Retrieved { stats } | MarketOutcome::MirrorFallback { stats } => Some(stats),
            MarketOutcome::Failed { .. } => None,
        }
    }

    /// Market data line embedded in the report prompt.
    pub fn summary(&self) -> String {
        match self {
            MarketOutcome::Retrieved { stats } => stats.summary(),
            MarketOutcome::MirrorFallback { .. } => {
                "Direct Data Unavailable. Used Mirror Data logic.".to_string()
            }
            MarketOutcome::Failed { .. } => "Data fetch failed.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryStatus {
    Found,
    NoneFound,
    Failed,
}

/// Result of the buyer discovery phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryOutcome {
    pub status: DiscoveryStatus,
    pub leads: Vec<Lead>,
    /// Company names in discovery order, for the report prompt
    pub buyer_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiscoveryOutcome {
    pub fn found(leads: Vec<Lead>) -> Self {
        if leads.is_empty() {
            return Self::none_found();
        }
        let buyer_names = leads.iter().map(|l| l.company_name.clone()).collect();
        Self {
            status: DiscoveryStatus::Found,
            leads,
            buyer_names,
            error: None,
        }
    }

    pub fn none_found() -> Self {
        Self {
            status: DiscoveryStatus::NoneFound,
            leads: vec![],
            buyer_names: vec![],
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            status: DiscoveryStatus::Failed,
            leads: vec![],
            buyer_names: vec![],
            error: Some(error),
        }
    }

    /// Comma-joined buyer names; empty when nothing was found.
    pub fn buyers_line(&self) -> String {
        self.buyer_names.join(", ")
    }
}

/// Result of the report phase. The text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NarrativeOutcome {
    Generated { report: String },
    Failed { error: String },
}

impl NarrativeOutcome {
    pub fn report(&self) -> Option<&str> {
        match self {
            NarrativeOutcome::Generated { report } => Some(report),
            NarrativeOutcome::Failed { .. } => None,
        }
    }
}

/// Everything one run produced. Lives only as long as the response that shows it.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub language: Language,
    pub query: MarketQuery,
    pub market: MarketOutcome,
    pub discovery: DiscoveryOutcome,
    pub narrative: NarrativeOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}
