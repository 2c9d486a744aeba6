pub mod comtrade;
pub mod gemini;
pub mod google_search;
pub mod hunter;

use crate::domain::error::ProviderError;

/// The request URL is dropped from the message: some providers take
/// credentials as query parameters.
impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_decode() {
            ProviderError::Parse(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}

/// Client shared by all adapters of one process.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("Growmarkt/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// Turns a non-success response into `ProviderError::Status`.
async fn ensure_success(
    provider: &'static str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        provider,
        status,
        body,
    })
}
