//! Card domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    FALLBACK_CURRENCY, MINIMUM_PAYMENT_FLOOR, MINIMUM_PAYMENT_RATE, PERCENT_DECIMAL_PRECISION,
};
use crate::fx::resolve_currency;
use crate::utils::date_utils::days_until_day_of_month;

/// A credit or debit card record as returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    #[serde(default)]
    pub card_name: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
    #[serde(default)]
    pub current_balance: Option<Decimal>,
    /// Payment due day of month (1..=31).
    #[serde(default)]
    pub due_date: Option<u32>,
}

impl CreditCard {
    pub fn native_currency(&self) -> String {
        resolve_currency(
            self.currency.as_deref(),
            self.country.as_deref(),
            FALLBACK_CURRENCY,
        )
    }

    pub fn balance(&self) -> Decimal {
        self.current_balance.unwrap_or_default()
    }

    pub fn limit(&self) -> Decimal {
        self.credit_limit.unwrap_or_default()
    }

    /// Outstanding balance over credit limit, as a percentage rounded to
    /// one decimal place. A zero or missing limit yields 0, never a
    /// division error. The raw ratio can exceed 100; capping is left to
    /// presentation.
    pub fn utilization(&self) -> Decimal {
        let limit = self.limit();
        if limit.is_zero() {
            return Decimal::ZERO;
        }
        (self.balance() / limit * Decimal::ONE_HUNDRED).round_dp(PERCENT_DECIMAL_PRECISION)
    }

    /// Minimum payment heuristic: max(2% of balance, 25), computed in the
    /// card's native currency BEFORE any display conversion.
    pub fn minimum_payment(&self) -> Decimal {
        let by_rate = self.balance() * MINIMUM_PAYMENT_RATE;
        by_rate.max(MINIMUM_PAYMENT_FLOOR)
    }

    /// Days until the next payment due day, projected onto the current or
    /// next month. None when the card has no due day.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date
            .map(|day| days_until_day_of_month(day, today))
    }
}

/// Roll-up over a user's cards, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsSummary {
    pub total_credit_limit: Decimal,
    pub total_outstanding: Decimal,
    pub available_credit: Decimal,
    /// Aggregate outstanding / aggregate limit, one decimal place.
    pub overall_utilization: Decimal,
    pub count: usize,
    /// Card ids with a payment due within the next week.
    pub upcoming_payment_ids: Vec<i64>,
    /// Card ids at or above the high-utilization threshold.
    pub high_utilization_ids: Vec<i64>,
    pub display_currency: String,
}
