use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface and report language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    /// Name shown in the language selector.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
        }
    }

    /// Language name the report generator is told to answer in.
    pub fn ai_instruction(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Turkish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "tr" | "türkçe" | "turkce" | "turkish" => Ok(Language::Tr),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}
