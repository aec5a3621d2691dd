//! Stock portfolio models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_DECIMAL_PRECISION;

/// A stock holding as returned by the collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub shares: Option<Decimal>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl Stock {
    pub fn shares(&self) -> Decimal {
        self.shares.unwrap_or_default()
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }

    /// Market value, falling back to the purchase price when no quote
    /// has been recorded yet.
    pub fn value(&self) -> Decimal {
        let price = self
            .current_price
            .or(self.purchase_price)
            .unwrap_or_default();
        self.shares() * price
    }

    pub fn cost(&self) -> Decimal {
        self.shares() * self.purchase_price.unwrap_or_default()
    }

    pub fn gain(&self) -> Decimal {
        self.value() - self.cost()
    }

    /// Gain as a percentage of cost, 1 dp. Zero cost reads zero.
    pub fn gain_percent(&self) -> Decimal {
        let cost = self.cost();
        if cost.is_zero() {
            return Decimal::ZERO;
        }
        (self.gain() / cost * Decimal::ONE_HUNDRED).round_dp(PERCENT_DECIMAL_PRECISION)
    }
}

/// Per-holding breakdown in the display currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPosition {
    pub id: i64,
    pub symbol: String,
    pub value: Decimal,
    pub cost: Decimal,
    pub gain: Decimal,
    pub gain_percent: Decimal,
}

/// Portfolio aggregate in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StocksSummary {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_gain: Decimal,
    pub count: usize,
    pub positions: Vec<StockPosition>,
    pub display_currency: String,
}
