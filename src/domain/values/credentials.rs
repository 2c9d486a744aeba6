use crate::domain::error::DomainError;
use serde::Deserialize;
use std::fmt;

/// The five provider credentials of one run.
///
/// Built from the submitted form (or CLI flags) and dropped when the run ends.
/// `Debug` is hand-written so keys never reach the logs.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub gemini_key: String,
    #[serde(default)]
    pub comtrade_key: String,
    #[serde(default)]
    pub google_key: String,
    #[serde(default)]
    pub google_cx: String,
    #[serde(default)]
    pub hunter_key: String,
}

impl Credentials {
    /// Labels of the fields, in form order.
    pub const FIELDS: [&'static str; 5] = [
        "Gemini API Key",
        "UN Comtrade Key",
        "Google API Key",
        "Google Search Engine ID (CX)",
        "Hunter.io API Key",
    ];

    fn values(&self) -> [&str; 5] {
        [
            self.gemini_key.as_str(),
            self.comtrade_key.as_str(),
            self.google_key.as_str(),
            self.google_cx.as_str(),
            self.hunter_key.as_str(),
        ]
    }

    /// Labels of every blank credential.
    pub fn missing(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .zip(self.values())
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect()
    }

    /// Fails with a single error naming all blank fields.
    pub fn check(&self) -> Result<(), DomainError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingCredentials(missing))
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &str| if v.trim().is_empty() { "<empty>" } else { "<set>" };
        f.debug_struct("Credentials")
            .field("gemini_key", &mask(&self.gemini_key))
            .field("comtrade_key", &mask(&self.comtrade_key))
            .field("google_key", &mask(&self.google_key))
            .field("google_cx", &mask(&self.google_cx))
            .field("hunter_key", &mask(&self.hunter_key))
            .finish()
    }
}
