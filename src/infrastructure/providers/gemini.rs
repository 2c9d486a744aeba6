use super::ensure_success;
use crate::domain::error::ProviderError;
use crate::domain::ports::text_generator::TextGenerator;
use crate::domain::values::credentials::Credentials;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Google Gemini `generateContent`.
pub struct GeminiGenerator {
    base_url: String,
    client: reqwest::Client,
}

impl GeminiGenerator {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            client,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Text of the first candidate, all parts concatenated.
fn parse_text(body: &str) -> Result<String, ProviderError> {
    let resp: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::Parse(format!("Prompt blocked: {reason}")));
    }

    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProviderError::Parse("Gemini returned empty content".into()));
    }
    Ok(text)
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(
        &self,
        credentials: &Credentials,
        model: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        debug!(model, prompt_chars = prompt.len(), "Calling Gemini");

        let url = format!("{}/{model}:generateContent", self.base_url);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &credentials.gemini_key)
            .json(&body)
            .send()
            .await?;

        let text = ensure_success("Gemini", resp).await?.text().await?;
        parse_text(&text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
