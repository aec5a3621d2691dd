//! Bill domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{BILL_DUE_SOON_DAYS, MISSING_DUE_SORT_KEY};
use crate::utils::date_utils::days_until_day_of_month;

/// A recurring bill with a day-of-month due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    /// Day of month (1..=31) the bill is due.
    #[serde(default)]
    pub due_date: Option<u32>,
    #[serde(default)]
    pub is_paid: Option<bool>,
}

impl Bill {
    pub fn amount(&self) -> Decimal {
        self.amount.unwrap_or_default()
    }

    pub fn native_currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::constants::FALLBACK_CURRENCY)
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid.unwrap_or(false)
    }

    /// Days until the next occurrence of the due day. Day-of-month
    /// projection never goes negative; a missing due day sorts last.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        match self.due_date {
            Some(day) => days_until_day_of_month(day, today),
            None => MISSING_DUE_SORT_KEY,
        }
    }

    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        DueStatus::classify(self.days_until_due(today), BILL_DUE_SOON_DAYS)
    }
}

/// Urgency bucket for a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    /// Signed distance went negative. Unreachable for day-of-month
    /// projections, reachable for full-date domains.
    Overdue,
    DueSoon,
    Normal,
}

impl DueStatus {
    pub fn classify(days: i64, due_soon_window: i64) -> DueStatus {
        if days < 0 {
            DueStatus::Overdue
        } else if days <= due_soon_window {
            DueStatus::DueSoon
        } else {
            DueStatus::Normal
        }
    }
}

/// Aggregate over a user's bills, in the display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillsSummary {
    pub total_monthly: Decimal,
    pub unpaid_total: Decimal,
    pub count: usize,
    pub unpaid_count: usize,
    /// Unpaid bill ids, soonest due first; missing due dates last.
    pub unpaid_by_urgency: Vec<i64>,
    /// Unpaid bills due within the next 3 days.
    pub due_soon_ids: Vec<i64>,
    pub display_currency: String,
}
