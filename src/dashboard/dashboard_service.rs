use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use futures::join;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::income::{Income, IncomeRepositoryTrait};
use crate::spending::{Expense, ExpenseRepositoryTrait};
use crate::view::{degrade_to_default, degrade_to_empty};

use super::dashboard_model::{
    Dashboard, DashboardConfig, DashboardMetrics, Overview, TrendPoint,
};

/// Contract for the overview aggregate endpoint.
#[async_trait]
pub trait OverviewRepositoryTrait: Send + Sync {
    async fn get_overview(&self) -> Result<Overview>;
}

pub struct DashboardService {
    fx_service: Arc<dyn FxServiceTrait>,
    config: DashboardConfig,
    overview_repository: Arc<dyn OverviewRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    income_repository: Arc<dyn IncomeRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        config: DashboardConfig,
        overview_repository: Arc<dyn OverviewRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        income_repository: Arc<dyn IncomeRepositoryTrait>,
    ) -> Self {
        DashboardService {
            fx_service,
            config,
            overview_repository,
            expense_repository,
            income_repository,
        }
    }

    /// Derives the ratio metrics and the composite health score.
    ///
    /// Every ratio guards its denominator; the emergency-fund months
    /// substitute 1 for a zero expense denominator rather than dividing
    /// by zero.
    pub fn compute_metrics(overview: &Overview) -> DashboardMetrics {
        let monthly_balance = overview.monthly_income - overview.monthly_expenses;

        let savings_rate = if overview.monthly_income > Decimal::ZERO {
            (monthly_balance / overview.monthly_income * Decimal::ONE_HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION)
        } else {
            Decimal::ZERO
        };

        let assets = overview.total_bank_accounts + overview.total_savings + overview.total_stocks;
        let debt = overview.total_credit_balance + overview.active_installments;
        let debt_ratio = if assets > Decimal::ZERO {
            debt / assets
        } else {
            Decimal::ZERO
        };

        let expense_base = if overview.monthly_expenses > Decimal::ZERO {
            overview.monthly_expenses
        } else {
            Decimal::ONE
        };
        let emergency_fund_months = overview.total_savings / expense_base;

        DashboardMetrics {
            monthly_balance,
            savings_rate,
            debt_ratio,
            emergency_fund_months,
            health_score: Self::health_score(
                savings_rate,
                debt_ratio,
                emergency_fund_months,
                overview.net_worth,
                overview.monthly_income,
            ),
        }
    }

    /// Base 50, plus tiered blocks for savings rate, debt ratio and
    /// emergency fund, plus a net-worth block; clamped to 0..=100.
    fn health_score(
        savings_rate: Decimal,
        debt_ratio: Decimal,
        emergency_fund_months: Decimal,
        net_worth: Decimal,
        monthly_income: Decimal,
    ) -> u32 {
        let mut score: i64 = 50;

        score += if savings_rate >= dec!(20) {
            25
        } else if savings_rate >= dec!(10) {
            15
        } else if savings_rate >= dec!(5) {
            10
        } else if savings_rate > Decimal::ZERO {
            5
        } else {
            0
        };

        score += if debt_ratio < dec!(0.2) {
            25
        } else if debt_ratio < dec!(0.3) {
            20
        } else if debt_ratio < dec!(0.5) {
            10
        } else if debt_ratio < dec!(0.7) {
            5
        } else {
            0
        };

        score += if emergency_fund_months >= dec!(6) {
            25
        } else if emergency_fund_months >= dec!(3) {
            15
        } else if emergency_fund_months >= Decimal::ONE {
            10
        } else {
            0
        };

        score += if net_worth > Decimal::ZERO {
            25
        } else if net_worth >= -monthly_income * dec!(3) {
            10
        } else {
            0
        };

        score.clamp(0, 100) as u32
    }

    /// Buckets expenses and income by calendar month, converting each
    /// record into the display currency, chronological order.
    pub fn monthly_trend(
        &self,
        expenses: &[Expense],
        income: &[Income],
        display_currency: &str,
    ) -> Vec<TrendPoint> {
        let mut buckets: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();

        for expense in expenses {
            let Some(date) = expense.date else { continue };
            let converted = self.fx_service.convert_currency(
                expense.amount(),
                expense.native_currency(),
                display_currency,
            );
            buckets
                .entry((date.year(), date.month()))
                .or_insert((Decimal::ZERO, Decimal::ZERO))
                .1 += converted;
        }
        for record in income {
            let Some(date) = record.date else { continue };
            let converted = self.fx_service.convert_currency(
                record.amount(),
                record.native_currency(),
                display_currency,
            );
            buckets
                .entry((date.year(), date.month()))
                .or_insert((Decimal::ZERO, Decimal::ZERO))
                .0 += converted;
        }

        buckets
            .into_iter()
            .map(|((year, month), (income, expenses))| TrendPoint {
                year,
                month,
                income,
                expenses,
            })
            .collect()
    }

    /// Re-prices every overview amount from the configured default
    /// currency into the chosen display currency. Counts pass through.
    fn convert_overview(&self, overview: Overview, display_currency: &str) -> Overview {
        let from = overview
            .default_currency
            .clone()
            .unwrap_or_else(|| self.config.default_display_currency.clone());
        if from == display_currency {
            return overview;
        }
        let conv = |amount| {
            self.fx_service
                .convert_currency(amount, &from, display_currency)
        };
        Overview {
            total_bank_accounts: conv(overview.total_bank_accounts),
            total_credit_limit: conv(overview.total_credit_limit),
            total_credit_balance: conv(overview.total_credit_balance),
            available_credit: conv(overview.available_credit),
            total_savings: conv(overview.total_savings),
            total_stocks: conv(overview.total_stocks),
            monthly_expenses: conv(overview.monthly_expenses),
            monthly_income: conv(overview.monthly_income),
            active_installments: conv(overview.active_installments),
            net_worth: conv(overview.net_worth),
            default_currency: Some(display_currency.to_string()),
            ..overview
        }
    }

    /// Fetches the three inputs concurrently, degrades each
    /// independently, and composes the view. A `None` display currency
    /// falls back to the configured default.
    pub async fn get_dashboard(&self, display_currency: Option<&str>) -> Result<Dashboard> {
        let display_currency =
            display_currency.unwrap_or(&self.config.default_display_currency);

        let (overview, expenses, income) = join!(
            self.overview_repository.get_overview(),
            self.expense_repository.get_expenses(),
            self.income_repository.get_income(),
        );
        let overview = degrade_to_default(overview, "overview")?;
        let expenses = degrade_to_empty(expenses, "expenses")?;
        let income = degrade_to_empty(income, "income")?;

        let overview = self.convert_overview(overview, display_currency);
        let metrics = Self::compute_metrics(&overview);
        let trend = self.monthly_trend(&expenses, &income, display_currency);
        let is_empty = overview.is_empty();
        if is_empty {
            log::debug!(
                "Dashboard empty, showing '{}' copy",
                self.config.empty_state_copy.heading()
            );
        }

        Ok(Dashboard {
            overview,
            metrics,
            trend,
            is_empty,
            display_currency: display_currency.to_string(),
        })
    }
}
