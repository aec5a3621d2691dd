//! Installment domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cards::CreditCard;
use crate::constants::FALLBACK_CURRENCY;
use crate::utils::date_utils::days_until;

/// An installment plan as returned by the collection endpoint. The plan
/// itself carries no currency; it inherits the linked card's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub id: i64,
    #[serde(default)]
    pub credit_card_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    #[serde(default)]
    pub monthly_payment: Option<Decimal>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Installment {
    pub fn remaining(&self) -> Decimal {
        self.remaining_amount.unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("active")
    }

    /// Currency inherited from the linked card: the card's explicit
    /// currency, else its country's, else USD. Same fallback when the
    /// link is dangling.
    pub fn native_currency(&self, cards: &[CreditCard]) -> String {
        self.credit_card_id
            .and_then(|card_id| cards.iter().find(|card| card.id == card_id))
            .map(|card| card.native_currency())
            .unwrap_or_else(|| FALLBACK_CURRENCY.to_string())
    }

    /// Signed days until the final payment; negative when overdue.
    pub fn days_until_end(&self, today: NaiveDate) -> Option<i64> {
        self.end_date.map(|end| days_until(end, today))
    }
}

/// Roll-up over a user's installments, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentsSummary {
    pub total_remaining: Decimal,
    pub count: usize,
    pub active_count: usize,
    /// Active installments ending within the next month.
    pub upcoming_ids: Vec<i64>,
    pub display_currency: String,
}
