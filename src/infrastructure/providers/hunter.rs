use super::ensure_success;
use crate::domain::error::ProviderError;
use crate::domain::ports::contact_finder::ContactFinder;
use crate::domain::values::credentials::Credentials;
use async_trait::async_trait;
use tracing::debug;

/// Hunter.io domain search, asking for a single address.
pub struct HunterContacts {
    base_url: String,
    client: reqwest::Client,
}

impl HunterContacts {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            base_url: "https://api.hunter.io/v2/domain-search".into(),
            client,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct DomainSearchResponse {
    #[serde(default)]
    data: Option<DomainData>,
}

#[derive(Debug, serde::Deserialize)]
struct DomainData {
    #[serde(default)]
    emails: Vec<EmailEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct EmailEntry {
    value: Option<String>,
}

fn parse_first_email(body: &str) -> Result<Option<String>, ProviderError> {
    let resp: DomainSearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    Ok(resp
        .data
        .and_then(|d| d.emails.into_iter().find_map(|e| e.value))
        .filter(|v| !v.trim().is_empty()))
}

#[async_trait]
impl ContactFinder for HunterContacts {
    async fn find_email(
        &self,
        credentials: &Credentials,
        domain: &str,
    ) -> Result<Option<String>, ProviderError> {
        debug!(domain, "Querying Hunter domain search");

        let resp = self
            .client
            .get(&self.base_url)
            .header("X-API-KEY", &credentials.hunter_key)
            .query(&[
                ("domain", domain),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let body = ensure_success("Hunter.io", resp).await?.text().await?;
        parse_first_email(&body)
    }

    fn name(&self) -> &str {
        "hunter"
    }
}
