use crate::domain::values::money::{usd_per_kg, usd_whole};
use serde::{Deserialize, Serialize};

/// One annual import record as returned by the statistics provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRow {
    #[serde(default)]
    pub primary_value: Option<f64>,
    #[serde(default, rename = "netWgt")]
    pub net_weight: Option<f64>,
}

impl TradeRow {
    pub fn new(primary_value: f64, net_weight: f64) -> Self {
        Self {
            primary_value: Some(primary_value),
            net_weight: Some(net_weight),
        }
    }
}

/// Import totals for one (country, product, period).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Total import value in USD
    pub total_value: f64,
    /// Total net weight in kg
    pub total_weight: f64,
    /// USD per kg, 0 when no weight was reported
    pub unit_price: f64,
    pub data_available: bool,
}

impl TradeStats {
    /// Sums value and weight over all rows. Missing cells count as zero.
    pub fn from_rows(rows: &[TradeRow]) -> Self {
        let total_value: f64 = rows.iter().filter_map(|r| r.primary_value).sum();
        let total_weight: f64 = rows.iter().filter_map(|r| r.net_weight).sum();
        let unit_price = if total_weight > 0.0 {
            total_value / total_weight
        } else {
            0.0
        };

        Self {
            total_value,
            total_weight,
            unit_price,
            data_available: !rows.is_empty() && total_weight > 0.0,
        }
    }

    /// `$1,000,000`
    pub fn display_value(&self) -> String {
        usd_whole(self.total_value)
    }

    /// `$2.00/kg`
    pub fn display_unit_price(&self) -> String {
        usd_per_kg(self.unit_price)
    }

    /// Free-text summary handed to the report generator.
    pub fn summary(&self) -> String {
        format!(
            "Total Import: {}. Unit Price: {}.",
            self.display_value(),
            self.display_unit_price()
        )
    }
}
