//! Dashboard wire and view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::constants::FALLBACK_CURRENCY;

/// The overview endpoint's aggregate payload.
///
/// Counts may arrive as JSON numbers or strings (documented quirk of the
/// endpoint); `PickFirst` coerces either. Missing fields read as zero.
/// Amounts arrive pre-converted into the user's default currency.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub total_bank_accounts: Decimal,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub bank_accounts_count: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub credit_cards_count: u32,
    pub total_credit_limit: Decimal,
    pub total_credit_balance: Decimal,
    pub available_credit: Decimal,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub savings_count: u32,
    pub total_savings: Decimal,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub stocks_count: u32,
    pub total_stocks: Decimal,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub expenses_count: u32,
    pub monthly_expenses: Decimal,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub income_count: u32,
    pub monthly_income: Decimal,
    pub active_installments: Decimal,
    pub net_worth: Decimal,
    pub default_currency: Option<String>,
}

impl Overview {
    /// A dashboard is empty only when every domain is empty; any single
    /// record anywhere suppresses the welcome screen.
    pub fn is_empty(&self) -> bool {
        self.bank_accounts_count == 0
            && self.credit_cards_count == 0
            && self.savings_count == 0
            && self.stocks_count == 0
            && self.expenses_count == 0
            && self.income_count == 0
    }
}

/// Metrics derived from an [`Overview`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub monthly_balance: Decimal,
    /// Percent of monthly income left after expenses, 1 dp. No income
    /// reads zero.
    pub savings_rate: Decimal,
    /// Debt over assets as a plain ratio. No assets reads zero.
    pub debt_ratio: Decimal,
    /// Months of expenses covered by savings.
    pub emergency_fund_months: Decimal,
    /// 0..=100 composite score.
    pub health_score: u32,
}

/// One month of the income/expense trend, in the display currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expenses: Decimal,
}

/// Copy variant for the empty-state welcome screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyStateCopy {
    #[default]
    Standard,
    Enhanced,
}

impl EmptyStateCopy {
    pub fn heading(&self) -> &'static str {
        match self {
            EmptyStateCopy::Standard => "Welcome to Your Financial Dashboard",
            EmptyStateCopy::Enhanced => "Take Control of Your Finances",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            EmptyStateCopy::Standard => {
                "Add your first account to see your finances in one place"
            }
            EmptyStateCopy::Enhanced => {
                "Powerful tracking and insights, starting with your first account"
            }
        }
    }
}

/// Configuration the composer is parameterized by. The two dashboard
/// variants differ only in copy and default currency.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub default_display_currency: String,
    pub empty_state_copy: EmptyStateCopy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            default_display_currency: FALLBACK_CURRENCY.to_string(),
            empty_state_copy: EmptyStateCopy::Standard,
        }
    }
}

/// The composed dashboard view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub overview: Overview,
    pub metrics: DashboardMetrics,
    pub trend: Vec<TrendPoint>,
    pub is_empty: bool,
    pub display_currency: String,
}
