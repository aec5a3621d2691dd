//! Expense domain models.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An expense record as returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Expense {
    pub fn amount(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("Other")
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }
}

/// Aggregate over a user's expenses, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub total: Decimal,
    /// Spend in the month containing the reference date.
    pub monthly_total: Decimal,
    pub count: usize,
    /// Converted spend per category.
    pub by_category: HashMap<String, Decimal>,
    /// Category with the highest converted spend.
    pub top_category: Option<(String, Decimal)>,
    /// Mean converted amount per record; zero when there are none.
    pub average: Decimal,
    pub display_currency: String,
}
