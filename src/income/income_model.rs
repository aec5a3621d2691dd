//! Income domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An income record as returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    #[serde(default)]
    pub income_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Income {
    pub fn amount(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }

    pub fn income_type(&self) -> &str {
        self.income_type.as_deref().unwrap_or("Other")
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }
}

/// Aggregate over a user's income records, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub total: Decimal,
    /// Income in the month containing the reference date.
    pub monthly_total: Decimal,
    pub count: usize,
    /// Converted income per type (salary, freelance, ...).
    pub by_type: HashMap<String, Decimal>,
    /// Source with the highest converted total.
    pub top_source: Option<(String, Decimal)>,
    pub display_currency: String,
}
