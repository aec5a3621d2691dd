//! Savings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_DECIMAL_PRECISION;

/// A savings account with an optional goal target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsAccount {
    pub id: i64,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub current_balance: Option<Decimal>,
    #[serde(default)]
    pub goal_amount: Option<Decimal>,
}

impl SavingsAccount {
    pub fn balance(&self) -> Decimal {
        self.current_balance.unwrap_or_default()
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }

    pub fn has_goal(&self) -> bool {
        self.goal_amount
            .map(|g| g > Decimal::ZERO)
            .unwrap_or(false)
    }

    /// Progress toward the goal as a percentage, capped at 100.
    /// No goal or a zero goal reads as zero progress.
    pub fn progress(&self) -> Decimal {
        let goal = self.goal_amount.unwrap_or_default();
        if goal.is_zero() {
            return Decimal::ZERO;
        }
        let pct = (self.balance() / goal * Decimal::ONE_HUNDRED)
            .round_dp(PERCENT_DECIMAL_PRECISION);
        pct.min(Decimal::ONE_HUNDRED)
    }
}

/// Aggregate over a user's savings accounts, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub total_saved: Decimal,
    pub total_goal: Decimal,
    /// Saved over goal as a percentage, 1 dp, uncapped. Zero goal reads zero.
    pub overall_progress: Decimal,
    pub count: usize,
    pub with_goals_count: usize,
    pub display_currency: String,
}
