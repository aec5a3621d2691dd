//! Loan domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_CURRENCY;
use crate::fx::resolve_currency;
use crate::utils::date_utils::days_until;

/// A loan record as returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    #[serde(default)]
    pub loan_name: Option<String>,
    #[serde(default)]
    pub loan_type: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub principal_amount: Option<Decimal>,
    #[serde(default)]
    pub remaining_balance: Option<Decimal>,
    #[serde(default)]
    pub monthly_payment: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Loan {
    pub fn native_currency(&self) -> String {
        resolve_currency(
            self.currency.as_deref(),
            self.country.as_deref(),
            FALLBACK_CURRENCY,
        )
    }

    pub fn remaining(&self) -> Decimal {
        self.remaining_balance.unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    /// Principal paid down so far; zero when either figure is missing.
    pub fn paid_down(&self) -> Decimal {
        match (self.principal_amount, self.remaining_balance) {
            (Some(principal), Some(remaining)) => principal - remaining,
            _ => Decimal::ZERO,
        }
    }

    /// Signed days until the loan's end date; negative when overdue.
    pub fn days_until_end(&self, today: NaiveDate) -> Option<i64> {
        self.end_date.map(|end| days_until(end, today))
    }
}

/// Roll-up over a user's loans, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoansSummary {
    pub total_remaining: Decimal,
    /// Principal paid down across loans where both figures are present.
    pub total_paid_down: Decimal,
    pub count: usize,
    pub active_count: usize,
    /// Loan ids ending within the next month (active loans only).
    pub upcoming_ids: Vec<i64>,
    pub display_currency: String,
}
