use super::ensure_success;
use crate::domain::entities::lead::SearchHit;
use crate::domain::error::ProviderError;
use crate::domain::ports::web_search::WebSearch;
use crate::domain::values::credentials::Credentials;
use async_trait::async_trait;
use tracing::debug;

/// The Custom Search JSON API returns at most 10 results per request.
pub const MAX_RESULTS: usize = 10;

/// Google Custom Search JSON API.
pub struct GoogleSearch {
    base_url: String,
    client: reqwest::Client,
}

impl GoogleSearch {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            base_url: "https://www.googleapis.com/customsearch/v1".into(),
            client,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    // Absent when the query has no results.
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    display_link: String,
}

fn parse_hits(body: &str, count: usize) -> Result<Vec<SearchHit>, ProviderError> {
    let resp: SearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    Ok(resp
        .items
        .into_iter()
        .filter(|item| !item.display_link.trim().is_empty())
        .take(count)
        .map(|item| SearchHit::new(item.title, item.display_link))
        .collect())
}

#[async_trait]
impl WebSearch for GoogleSearch {
    async fn search(
        &self,
        credentials: &Credentials,
        query: &str,
        count: usize,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        let count = count.clamp(1, MAX_RESULTS);
        debug!(query, count, "Querying Google Custom Search");

        let num = count.to_string();
        let resp = self
            .client
            .get(&self.base_url)
            .header("x-goog-api-key", &credentials.google_key)
            .query(&[
                ("cx", credentials.google_cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let body = ensure_success("Google Custom Search", resp).await?.text().await?;
        parse_hits(&body, count)
    }

    fn name(&self) -> &str {
        "google_custom_search"
    }
}
