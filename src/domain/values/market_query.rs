use serde::{Deserialize, Serialize};

/// What to look up: a product, its HS code and the target (reporter) country.
///
/// Codes are passed to the providers as entered; nothing here checks that
/// they exist. Deserializing goes through [`MarketQuery::new`], so submitted
/// fields are trimmed the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MarketQueryFields")]
pub struct MarketQuery {
    pub product_name: String,
    pub hs_code: String,
    pub country_code: String,
    pub country_name: String,
}

#[derive(Deserialize)]
struct MarketQueryFields {
    product_name: String,
    hs_code: String,
    country_code: String,
    country_name: String,
}

impl From<MarketQueryFields> for MarketQuery {
    fn from(f: MarketQueryFields) -> Self {
        MarketQuery::new(f.product_name, f.hs_code, f.country_code, f.country_name)
    }
}

impl MarketQuery {
    pub fn new(
        product_name: impl Into<String>,
        hs_code: impl Into<String>,
        country_code: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into().trim().to_string(),
            hs_code: hs_code.into().trim().to_string(),
            country_code: country_code.into().trim().to_string(),
            country_name: country_name.into().trim().to_string(),
        }
    }

    /// Search query for importer/distributor discovery.
    pub fn buyer_search_query(&self) -> String {
        format!(
            "top {} importers distributors {} -site:pinterest.*",
            self.product_name, self.country_name
        )
    }
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self::new("Hazelnuts", "0802", "276", "Germany")
    }
}
