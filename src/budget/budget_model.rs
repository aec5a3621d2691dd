//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monthly spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    #[serde(default)]
    pub monthly_limit: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl Budget {
    pub fn limit(&self) -> Decimal {
        self.monthly_limit.unwrap_or_default()
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }

    /// A budget without an explicit month/year applies to every month.
    pub fn applies_to(&self, year: i32, month: u32) -> bool {
        self.year.map(|y| y == year).unwrap_or(true)
            && self.month.map(|m| m == month).unwrap_or(true)
    }
}

/// One budget line joined against the month's spend, in the display currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    pub id: i64,
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    /// Spent over limit as a percentage, 1 dp, uncapped. Zero limit reads zero.
    pub percentage_used: Decimal,
    pub over_budget: bool,
}

/// All budget lines for one month, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_limit: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
    pub lines: Vec<BudgetLine>,
    pub over_budget_count: usize,
    pub display_currency: String,
}
