//! Shared test helpers: in-memory providers that record every call.

#![allow(dead_code)]

use growmarkt::application::run_pipeline::{RunRequest, RunSettings};
use growmarkt::domain::entities::lead::SearchHit;
use growmarkt::domain::entities::trade_stats::TradeRow;
use growmarkt::domain::error::ProviderError;
use growmarkt::domain::ports::contact_finder::ContactFinder;
use growmarkt::domain::ports::text_generator::TextGenerator;
use growmarkt::domain::ports::trade_stats_provider::{ImportStatsRequest, TradeStatsProvider};
use growmarkt::domain::ports::web_search::WebSearch;
use growmarkt::domain::values::credentials::Credentials;
use growmarkt::domain::values::language::Language;
use growmarkt::domain::values::market_query::MarketQuery;
use growmarkt::Growmarkt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn fail(msg: &str) -> ProviderError {
    ProviderError::Network(msg.to_string())
}

pub struct MockStats {
    pub reply: Result<Vec<TradeRow>, String>,
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<ImportStatsRequest>>,
}

#[async_trait::async_trait]
impl TradeStatsProvider for MockStats {
    async fn fetch_imports(
        &self,
        _credentials: &Credentials,
        request: &ImportStatsRequest,
    ) -> Result<Vec<TradeRow>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(|e| fail(&e))
    }

    fn name(&self) -> &str {
        "mock_stats"
    }
}

pub struct MockSearch {
    pub reply: Result<Vec<SearchHit>, String>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<(String, usize)>>,
}

#[async_trait::async_trait]
impl WebSearch for MockSearch {
    async fn search(
        &self,
        _credentials: &Credentials,
        query: &str,
        count: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push((query.to_string(), count));
        // Returns everything it holds, ignoring `count`.
        self.reply.clone().map_err(|e| fail(&e))
    }

    fn name(&self) -> &str {
        "mock_search"
    }
}

/// Domains missing from `emails` answer `Ok(None)`; domains in `failing` error.
pub struct MockContacts {
    pub emails: HashMap<String, String>,
    pub failing: Vec<String>,
    pub calls: AtomicUsize,
    pub domains: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ContactFinder for MockContacts {
    async fn find_email(
        &self,
        _credentials: &Credentials,
        domain: &str,
    ) -> Result<Option<String>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.domains.lock().unwrap().push(domain.to_string());
        if self.failing.iter().any(|d| d == domain) {
            return Err(fail("hunter unavailable"));
        }
        Ok(self.emails.get(domain).cloned())
    }

    fn name(&self) -> &str {
        "mock_contacts"
    }
}

pub struct MockGenerator {
    pub reply: Result<String, String>,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        _credentials: &Credentials,
        model: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push((model.to_string(), prompt.to_string()));
        self.reply.clone().map_err(|e| fail(&e))
    }

    fn name(&self) -> &str {
        "mock_generator"
    }
}

pub struct Mocks {
    pub stats: Arc<MockStats>,
    pub search: Arc<MockSearch>,
    pub contacts: Arc<MockContacts>,
    pub generator: Arc<MockGenerator>,
}

impl Mocks {
    pub fn new(
        stats: Result<Vec<TradeRow>, String>,
        search: Result<Vec<SearchHit>, String>,
        emails: &[(&str, &str)],
        failing: &[&str],
        generator: Result<String, String>,
    ) -> Self {
        Self {
            stats: Arc::new(MockStats {
                reply: stats,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(vec![]),
            }),
            search: Arc::new(MockSearch {
                reply: search,
                calls: AtomicUsize::new(0),
                queries: Mutex::new(vec![]),
            }),
            contacts: Arc::new(MockContacts {
                emails: emails.iter().map(|(d, e)| (d.to_string(), e.to_string())).collect(),
                failing: failing.iter().map(|d| d.to_string()).collect(),
                calls: AtomicUsize::new(0),
                domains: Mutex::new(vec![]),
            }),
            generator: Arc::new(MockGenerator {
                reply: generator,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(vec![]),
            }),
        }
    }

    /// Hazelnut rows summing to $1,000,000 / 500,000 kg, two buyers, one email.
    pub fn happy() -> Self {
        Self::new(
            Ok(vec![TradeRow::new(600_000.0, 300_000.0), TradeRow::new(400_000.0, 200_000.0)]),
            Ok(vec![
                SearchHit::new("Nuss Import GmbH", "www.nuss-import.de"),
                SearchHit::new("Trockenfrucht AG", "trockenfrucht.de"),
            ]),
            &[("nuss-import.de", "einkauf@nuss-import.de")],
            &[],
            Ok("1. Verdict: Go".to_string()),
        )
    }

    pub fn app(&self) -> Growmarkt {
        Growmarkt::with_providers(
            self.stats.clone(),
            self.search.clone(),
            self.contacts.clone(),
            self.generator.clone(),
            RunSettings::default(),
        )
    }

    pub fn total_calls(&self) -> usize {
        self.stats.calls.load(Ordering::SeqCst)
            + self.search.calls.load(Ordering::SeqCst)
            + self.contacts.calls.load(Ordering::SeqCst)
            + self.generator.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> String {
        self.generator
            .prompts
            .lock()
            .unwrap()
            .last()
            .map(|(_, p)| p.clone())
            .unwrap_or_default()
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        gemini_key: "gemini".into(),
        comtrade_key: "comtrade".into(),
        google_key: "google".into(),
        google_cx: "cx".into(),
        hunter_key: "hunter".into(),
    }
}

pub fn request(language: Language) -> RunRequest {
    RunRequest {
        language,
        query: MarketQuery::new("Hazelnuts", "0802", "276", "Germany"),
        credentials: credentials(),
    }
}
