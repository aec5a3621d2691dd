use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::income_model::{Income, IncomeSummary};

/// Contract for the income collection endpoint.
#[async_trait]
pub trait IncomeRepositoryTrait: Send + Sync {
    async fn get_income(&self) -> Result<Vec<Income>>;
}

pub struct IncomeService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn IncomeRepositoryTrait>,
}

impl IncomeService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn IncomeRepositoryTrait>,
    ) -> Self {
        IncomeService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched income records.
    pub fn aggregate(
        &self,
        records: &[Income],
        display_currency: &str,
        today: NaiveDate,
    ) -> IncomeSummary {
        let mut total = Decimal::ZERO;
        let mut monthly_total = Decimal::ZERO;
        let mut by_type: HashMap<String, Decimal> = HashMap::new();
        let mut by_source: HashMap<String, Decimal> = HashMap::new();

        for record in records {
            let converted = self.fx_service.convert_currency(
                record.amount(),
                record.native_currency(),
                display_currency,
            );
            total += converted;
            if let Some(date) = record.date {
                if date.year() == today.year() && date.month() == today.month() {
                    monthly_total += converted;
                }
            }
            *by_type
                .entry(record.income_type().to_string())
                .or_insert(Decimal::ZERO) += converted;
            if let Some(source) = record.source.as_deref().filter(|s| !s.is_empty()) {
                *by_source.entry(source.to_string()).or_insert(Decimal::ZERO) += converted;
            }
        }

        let top_source = by_source
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, amount)| (name.clone(), *amount));

        IncomeSummary {
            total,
            monthly_total,
            count: records.len(),
            by_type,
            top_source,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(
        &self,
        display_currency: &str,
        today: NaiveDate,
    ) -> Result<IncomeSummary> {
        let records = degrade_to_empty(self.repository.get_income().await, "income")?;
        Ok(self.aggregate(&records, display_currency, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::fx::CurrencyConverter;
    use rust_decimal_macros::dec;

    struct MockIncomeRepository {
        result: std::sync::Mutex<Option<Result<Vec<Income>>>>,
    }

    #[async_trait]
    impl IncomeRepositoryTrait for MockIncomeRepository {
        async fn get_income(&self) -> Result<Vec<Income>> {
            self.result.lock().unwrap().take().unwrap()
        }
    }

    fn income(source: &str, amount: Decimal, currency: &str, date: &str) -> Income {
        Income {
            id: 1,
            income_type: Some("Salary".to_string()),
            source: Some(source.to_string()),
            amount: Some(amount),
            currency: Some(currency.to_string()),
            date: Some(date.parse().unwrap()),
        }
    }

    fn service(result: Result<Vec<Income>>) -> IncomeService {
        IncomeService::new(
            Arc::new(CurrencyConverter::new()),
            Arc::new(MockIncomeRepository {
                result: std::sync::Mutex::new(Some(result)),
            }),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_monthly_total_and_top_source() {
        let svc = service(Ok(vec![]));
        let records = vec![
            income("Acme", dec!(3000), "USD", "2024-06-01"),
            income("Side gig", dec!(675), "SGD", "2024-06-05"), // 500 USD
            income("Acme", dec!(3000), "USD", "2024-05-01"),
        ];
        let summary = svc.aggregate(&records, "USD", today());
        assert_eq!(summary.total, dec!(6500));
        assert_eq!(summary.monthly_total, dec!(3500));
        let (top, amount) = summary.top_source.unwrap();
        assert_eq!(top, "Acme");
        assert_eq!(amount, dec!(6000));
    }

    #[test]
    fn test_untyped_income_lands_in_other() {
        let svc = service(Ok(vec![]));
        let mut record = income("Acme", dec!(100), "USD", "2024-06-01");
        record.income_type = None;
        let summary = svc.aggregate(&[record], "USD", today());
        assert_eq!(summary.by_type.get("Other"), Some(&dec!(100)));
    }

    #[test]
    fn test_sourceless_income_still_counted_in_totals() {
        let svc = service(Ok(vec![]));
        let mut record = income("Acme", dec!(100), "USD", "2024-06-01");
        record.source = None;
        let summary = svc.aggregate(&[record], "USD", today());
        assert_eq!(summary.total, dec!(100));
        assert!(summary.top_source.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_summary() {
        let svc = service(Err(ApiError::Network("down".to_string()).into()));
        let summary = svc.get_summary("USD", today()).await.unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total, Decimal::ZERO);
    }
}
