use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failure of a single call to an external provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP or network error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Response parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}

