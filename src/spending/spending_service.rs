use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::spending_model::{Expense, SpendingSummary};

/// Contract for the expenses collection endpoint.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn get_expenses(&self) -> Result<Vec<Expense>>;
}

pub struct SpendingService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl SpendingService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        SpendingService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched expenses. `today` anchors
    /// the monthly total to its calendar month.
    pub fn aggregate(
        &self,
        expenses: &[Expense],
        display_currency: &str,
        today: NaiveDate,
    ) -> SpendingSummary {
        let mut total = Decimal::ZERO;
        let mut monthly_total = Decimal::ZERO;
        let mut by_category: HashMap<String, Decimal> = HashMap::new();

        for expense in expenses {
            let converted = self.fx_service.convert_currency(
                expense.amount(),
                expense.native_currency(),
                display_currency,
            );
            total += converted;
            if let Some(date) = expense.date {
                if date.year() == today.year() && date.month() == today.month() {
                    monthly_total += converted;
                }
            }
            *by_category
                .entry(expense.category().to_string())
                .or_insert(Decimal::ZERO) += converted;
        }

        // Highest-spend category; ties broken by name so the pick is stable.
        let top_category = by_category
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, amount)| (name.clone(), *amount));

        let average = if expenses.is_empty() {
            Decimal::ZERO
        } else {
            (total / Decimal::from(expenses.len() as u64)).round_dp(DISPLAY_DECIMAL_PRECISION)
        };

        SpendingSummary {
            total,
            monthly_total,
            count: expenses.len(),
            by_category,
            top_category,
            average,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(
        &self,
        display_currency: &str,
        today: NaiveDate,
    ) -> Result<SpendingSummary> {
        let expenses = degrade_to_empty(self.repository.get_expenses().await, "expenses")?;
        Ok(self.aggregate(&expenses, display_currency, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::fx::CurrencyConverter;
    use rust_decimal_macros::dec;

    struct MockExpenseRepository {
        result: std::sync::Mutex<Option<Result<Vec<Expense>>>>,
    }

    impl MockExpenseRepository {
        fn with(result: Result<Vec<Expense>>) -> Self {
            Self {
                result: std::sync::Mutex::new(Some(result)),
            }
        }
    }

    #[async_trait]
    impl ExpenseRepositoryTrait for MockExpenseRepository {
        async fn get_expenses(&self) -> Result<Vec<Expense>> {
            self.result.lock().unwrap().take().unwrap()
        }
    }

    fn expense(category: &str, amount: Decimal, currency: &str, date: &str) -> Expense {
        Expense {
            id: 1,
            category: Some(category.to_string()),
            description: None,
            amount: Some(amount),
            currency: Some(currency.to_string()),
            date: Some(date.parse().unwrap()),
        }
    }

    fn service(result: Result<Vec<Expense>>) -> SpendingService {
        SpendingService::new(
            Arc::new(CurrencyConverter::new()),
            Arc::new(MockExpenseRepository::with(result)),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_monthly_total_filters_current_month() {
        let svc = service(Ok(vec![]));
        let expenses = vec![
            expense("Food", dec!(100), "USD", "2024-06-01"),
            expense("Food", dec!(50), "USD", "2024-05-31"),
            expense("Food", dec!(25), "USD", "2023-06-10"),
        ];
        let summary = svc.aggregate(&expenses, "USD", today());
        assert_eq!(summary.total, dec!(175));
        assert_eq!(summary.monthly_total, dec!(100));
    }

    #[test]
    fn test_category_totals_and_top_category_converted() {
        let svc = service(Ok(vec![]));
        let expenses = vec![
            expense("Food", dec!(60), "USD", "2024-06-01"),
            // 135 SGD = 100 USD, so Travel wins despite the lower face value per record
            expense("Travel", dec!(67.5), "SGD", "2024-06-02"),
            expense("Travel", dec!(67.5), "SGD", "2024-06-03"),
        ];
        let summary = svc.aggregate(&expenses, "USD", today());
        assert_eq!(summary.by_category.get("Food"), Some(&dec!(60)));
        assert_eq!(summary.by_category.get("Travel"), Some(&dec!(100)));
        let (top, amount) = summary.top_category.unwrap();
        assert_eq!(top, "Travel");
        assert_eq!(amount, dec!(100));
    }

    #[test]
    fn test_average_guards_empty_set() {
        let svc = service(Ok(vec![]));
        let summary = svc.aggregate(&[], "USD", today());
        assert_eq!(summary.average, Decimal::ZERO);
        assert!(summary.top_category.is_none());
    }

    #[test]
    fn test_average_rounds_to_display_precision() {
        let svc = service(Ok(vec![]));
        let expenses = vec![
            expense("Food", dec!(10), "USD", "2024-06-01"),
            expense("Food", dec!(10), "USD", "2024-06-02"),
            expense("Food", dec!(5), "USD", "2024-06-03"),
        ];
        let summary = svc.aggregate(&expenses, "USD", today());
        assert_eq!(summary.average, dec!(8.33));
    }

    #[test]
    fn test_uncategorized_lands_in_other() {
        let svc = service(Ok(vec![]));
        let mut exp = expense("Food", dec!(10), "USD", "2024-06-01");
        exp.category = None;
        let summary = svc.aggregate(&[exp], "USD", today());
        assert_eq!(summary.by_category.get("Other"), Some(&dec!(10)));
    }

    #[test]
    fn test_undated_expense_excluded_from_monthly_total() {
        let svc = service(Ok(vec![]));
        let mut exp = expense("Food", dec!(10), "USD", "2024-06-01");
        exp.date = None;
        let summary = svc.aggregate(&[exp], "USD", today());
        assert_eq!(summary.total, dec!(10));
        assert_eq!(summary.monthly_total, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_summary() {
        let svc = service(Err(ApiError::Network("down".to_string()).into()));
        let summary = svc.get_summary("USD", today()).await.unwrap();
        assert_eq!(summary.count, 0);
    }
}
