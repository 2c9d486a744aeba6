use crate::domain::entities::lead::Lead;
use crate::domain::entities::run_report::DiscoveryOutcome;
use crate::domain::ports::contact_finder::ContactFinder;
use crate::domain::ports::web_search::WebSearch;
use crate::domain::values::credentials::Credentials;
use crate::domain::values::market_query::MarketQuery;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LeadDiscoveryUseCase {
    search: Arc<dyn WebSearch>,
    contacts: Arc<dyn ContactFinder>,
}

impl LeadDiscoveryUseCase {
    pub fn new(search: Arc<dyn WebSearch>, contacts: Arc<dyn ContactFinder>) -> Self {
        Self { search, contacts }
    }

    /// Searches for importers, then enriches each hit with an email, one
    /// lookup at a time. A failed lookup only affects its own lead.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        query: &MarketQuery,
        max_leads: usize,
    ) -> DiscoveryOutcome {
        let search_query = query.buyer_search_query();

        let hits = match self.search.search(credentials, &search_query, max_leads).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(provider = self.search.name(), error = %e, "Buyer search failed");
                return DiscoveryOutcome::failed(e.to_string());
            }
        };

        let mut leads = Vec::with_capacity(hits.len().min(max_leads));
        for hit in hits.into_iter().take(max_leads) {
            let domain = hit.domain();
            let email = match self.contacts.find_email(credentials, &domain).await {
                Ok(email) => email,
                Err(e) => {
                    warn!(provider = self.contacts.name(), %domain, error = %e, "Contact lookup failed");
                    None
                }
            };
            leads.push(Lead::new(hit.title, domain, email));
        }

        info!(
            leads = leads.len(),
            with_email = leads.iter().filter(|l| l.has_public_email()).count(),
            "Buyer discovery finished"
        );

        DiscoveryOutcome::found(leads)
    }
}
