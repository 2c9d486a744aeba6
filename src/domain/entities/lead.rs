use serde::{Deserialize, Serialize};

/// Email value of a lead whose contact lookup found nothing.
pub const NOT_PUBLIC: &str = "not public";

/// One web search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub title: String,
    pub display_link: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, display_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            display_link: display_link.into(),
        }
    }

    pub fn domain(&self) -> String {
        normalize_domain(&self.display_link)
    }
}

/// A candidate buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub company_name: String,
    pub domain: String,
    pub email: String,
}

impl Lead {
    pub fn new(company_name: String, domain: String, email: Option<String>) -> Self {
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| NOT_PUBLIC.to_string());
        Self {
            company_name,
            domain,
            email,
        }
    }

    pub fn has_public_email(&self) -> bool {
        self.email != NOT_PUBLIC
    }
}

/// Drops surrounding whitespace and a leading `www.`.
pub fn normalize_domain(display_link: &str) -> String {
    let trimmed = display_link.trim();
    trimmed
        .strip_prefix("www.")
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("www.nuts.de"), "nuts.de");
        assert_eq!(normalize_domain("nuts.de"), "nuts.de");
        assert_eq!(normalize_domain(" www.shop.www.de "), "shop.www.de");
    }

    #[test]
    fn test_missing_email_defaults() {
        let lead = Lead::new("Acme".into(), "acme.de".into(), None);
        assert_eq!(lead.email, NOT_PUBLIC);
        assert!(!lead.has_public_email());

        let blank = Lead::new("Acme".into(), "acme.de".into(), Some("  ".into()));
        assert_eq!(blank.email, NOT_PUBLIC);
    }

    #[test]
    fn test_found_email_kept() {
        let lead = Lead::new("Acme".into(), "acme.de".into(), Some("info@acme.de".into()));
        assert_eq!(lead.email, "info@acme.de");
        assert!(lead.has_public_email());
    }
}
