//! Bank account domain models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_CURRENCY;
use crate::fx::resolve_currency;

/// A bank account record as returned by the collection endpoint.
/// Field names match the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: i64,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub current_balance: Option<Decimal>,
}

impl BankAccount {
    /// Currency this account's balance is held in: explicit currency,
    /// else derived from the account's country, else USD.
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
}

/// Aggregate over a user's bank accounts, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSummary {
    pub total_balance: Decimal,
    pub count: usize,
    /// Account count per account type ("Checking", "Savings", ...).
    pub by_type: HashMap<String, usize>,
    pub display_currency: String,
}
