use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::entitlements::{ensure_feature, Entitlement, Feature};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::spending::{Expense, ExpenseRepositoryTrait};
use crate::view::degrade_to_empty;

use super::budget_model::{Budget, BudgetLine, BudgetSummary};

/// Contract for the budgets collection endpoint.
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    async fn get_budgets(&self) -> Result<Vec<Budget>>;
}

pub struct BudgetService {
    fx_service: Arc<dyn FxServiceTrait>,
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            fx_service,
            budget_repository,
            expense_repository,
        }
    }

    /// Joins each budget line against the month's spend per category.
    pub fn aggregate(
        &self,
        budgets: &[Budget],
        expenses: &[Expense],
        display_currency: &str,
        today: NaiveDate,
    ) -> BudgetSummary {
        // Converted spend per category for the reference month only.
        let mut spent_by_category: HashMap<&str, Decimal> = HashMap::new();
        for expense in expenses {
            let in_month = expense
                .date
                .map(|d| d.year() == today.year() && d.month() == today.month())
                .unwrap_or(false);
            if !in_month {
                continue;
            }
            let converted = self.fx_service.convert_currency(
                expense.amount(),
                expense.native_currency(),
                display_currency,
            );
            *spent_by_category
                .entry(expense.category())
                .or_insert(Decimal::ZERO) += converted;
        }

        let mut total_limit = Decimal::ZERO;
        let mut total_spent = Decimal::ZERO;
        let mut over_budget_count = 0;
        let mut lines = Vec::new();

        for budget in budgets {
            if !budget.applies_to(today.year(), today.month()) {
                continue;
            }
            let limit = self.fx_service.convert_currency(
                budget.limit(),
                budget.native_currency(),
                display_currency,
            );
            let spent = spent_by_category
                .get(budget.category.as_str())
                .copied()
                .unwrap_or_default();
            let percentage_used = if limit.is_zero() {
                Decimal::ZERO
            } else {
                (spent / limit * Decimal::ONE_HUNDRED).round_dp(PERCENT_DECIMAL_PRECISION)
            };
            let over_budget = spent > limit;
            if over_budget {
                over_budget_count += 1;
            }
            total_limit += limit;
            total_spent += spent;
            lines.push(BudgetLine {
                id: budget.id,
                category: budget.category.clone(),
                limit,
                spent,
                remaining: limit - spent,
                percentage_used,
                over_budget,
            });
        }

        BudgetSummary {
            total_limit,
            total_spent,
            total_remaining: total_limit - total_spent,
            lines,
            over_budget_count,
            display_currency: display_currency.to_string(),
        }
    }

    /// Entitlement is checked BEFORE any fetch; budgets are a premium
    /// feature.
    pub async fn get_summary(
        &self,
        entitlement: &Entitlement,
        display_currency: &str,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<BudgetSummary> {
        ensure_feature(entitlement, Feature::Budget, now)?;
        let budgets = degrade_to_empty(self.budget_repository.get_budgets().await, "budgets")?;
        let expenses = degrade_to_empty(self.expense_repository.get_expenses().await, "expenses")?;
        Ok(self.aggregate(&budgets, &expenses, display_currency, today))
    }
}
