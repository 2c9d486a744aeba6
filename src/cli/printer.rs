//! Terminal rendering of a run, one phase at a time.

use crate::application::run_pipeline::{RunEvent, RunObserver, RunState};
use crate::domain::entities::run_report::{DiscoveryStatus, MarketOutcome, NarrativeOutcome};
use crate::i18n::Texts;

/// The single message printed when a run is rejected for blank credentials.
pub fn credential_error(texts: &Texts, fields: &[&str]) -> String {
    format!("{} ({})", texts.error_api, fields.join(", "))
}

pub struct TerminalObserver {
    texts: &'static Texts,
}

impl TerminalObserver {
    pub fn new(texts: &'static Texts) -> Self {
        Self { texts }
    }
}

impl RunObserver for TerminalObserver {
    fn on_event(&self, event: &RunEvent<'_>) {
        let t = self.texts;
        match event {
            RunEvent::Entered(RunState::MarketPhase) => println!("\n{}", t.step_1),
            RunEvent::Entered(RunState::DiscoveryPhase) => println!("\n{}", t.step_2),
            RunEvent::Entered(RunState::NarrativePhase) => println!("\n{}", t.step_3),
            RunEvent::Entered(_) => {}
            RunEvent::MarketDone(market) => match market {
                MarketOutcome::Retrieved { stats } => {
                    println!("{}", t.success_data);
                    println!("  {}: {}", t.metric_volume, stats.display_value());
                    println!("  {}: {}", t.metric_unit_price, stats.display_unit_price());
                }
                MarketOutcome::MirrorFallback { .. } => println!("{}", t.warn_mirror),
                MarketOutcome::Failed { error } => println!("❌ {}: {error}", t.error_market),
            },
            RunEvent::DiscoveryDone(discovery) => match discovery.status {
                DiscoveryStatus::Found => {
                    println!("  {:<40} {:<30} {}", t.col_company, t.col_website, t.col_email);
                    for lead in &discovery.leads {
                        println!("  {:<40} {:<30} {}", lead.company_name, lead.domain, lead.email);
                    }
                }
                DiscoveryStatus::NoneFound => println!("⚠️ {}", t.no_buyers),
                DiscoveryStatus::Failed => println!(
                    "❌ {}: {}",
                    t.error_search,
                    discovery.error.as_deref().unwrap_or_default()
                ),
            },
            RunEvent::NarrativeDone(narrative) => match narrative {
                NarrativeOutcome::Generated { report } => {
                    println!("{}\n", t.report_heading);
                    println!("{report}");
                }
                NarrativeOutcome::Failed { error } => println!("❌ {}: {error}", t.error_ai),
            },
        }
    }
}
