use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::bills_model::{Bill, BillsSummary, DueStatus};

/// Contract for the bills collection endpoint.
#[async_trait]
pub trait BillRepositoryTrait: Send + Sync {
    async fn get_bills(&self) -> Result<Vec<Bill>>;
}

pub struct BillsService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn BillRepositoryTrait>,
}

impl BillsService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn BillRepositoryTrait>,
    ) -> Self {
        BillsService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched bills.
    pub fn aggregate(&self, bills: &[Bill], display_currency: &str, today: NaiveDate) -> BillsSummary {
        let mut total_monthly = Decimal::ZERO;
        let mut unpaid_total = Decimal::ZERO;
        let mut unpaid: Vec<(i64, i64)> = Vec::new();
        let mut due_soon_ids = Vec::new();

        for bill in bills {
            let converted = self.fx_service.convert_currency(
                bill.amount(),
                bill.native_currency(),
                display_currency,
            );
            total_monthly += converted;
            if bill.is_paid() {
                continue;
            }
            unpaid_total += converted;
            let days = bill.days_until_due(today);
            unpaid.push((days, bill.id));
            if bill.due_status(today) == DueStatus::DueSoon {
                due_soon_ids.push(bill.id);
            }
        }

        // Soonest due first; the missing-due sort key pushes undated
        // bills behind every dated one.
        unpaid.sort();
        let unpaid_count = unpaid.len();

        BillsSummary {
            total_monthly,
            unpaid_total,
            count: bills.len(),
            unpaid_count,
            unpaid_by_urgency: unpaid.into_iter().map(|(_, id)| id).collect(),
            due_soon_ids,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(
        &self,
        display_currency: &str,
        today: NaiveDate,
    ) -> Result<BillsSummary> {
        let bills = degrade_to_empty(self.repository.get_bills().await, "bills")?;
        Ok(self.aggregate(&bills, display_currency, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::fx::CurrencyConverter;
    use rust_decimal_macros::dec;

    struct MockBillRepository {
        result: std::sync::Mutex<Option<Result<Vec<Bill>>>>,
    }

    #[async_trait]
    impl BillRepositoryTrait for MockBillRepository {
        async fn get_bills(&self) -> Result<Vec<Bill>> {
            self.result.lock().unwrap().take().unwrap()
        }
    }

    fn bill(id: i64, amount: Decimal, due_day: Option<u32>, paid: bool) -> Bill {
        Bill {
            id,
            name: Some(format!("bill-{id}")),
            amount: Some(amount),
            currency: Some("USD".to_string()),
            due_date: due_day,
            is_paid: Some(paid),
        }
    }

    fn service(result: Result<Vec<Bill>>) -> BillsService {
        BillsService::new(
            Arc::new(CurrencyConverter::new()),
            Arc::new(MockBillRepository {
                result: std::sync::Mutex::new(Some(result)),
            }),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_unpaid_sorted_by_urgency_missing_due_last() {
        let svc = service(Ok(vec![]));
        let bills = vec![
            bill(1, dec!(10), Some(25), false), // 10 days out
            bill(2, dec!(10), None, false),     // no due day, sorts last
            bill(3, dec!(10), Some(16), false), // tomorrow
            bill(4, dec!(10), Some(5), false),  // passed, rolls to July 5th
        ];
        let summary = svc.aggregate(&bills, "USD", today());
        assert_eq!(summary.unpaid_by_urgency, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_due_soon_window_is_three_days() {
        let svc = service(Ok(vec![]));
        let bills = vec![
            bill(1, dec!(10), Some(15), false), // today
            bill(2, dec!(10), Some(18), false), // 3 days
            bill(3, dec!(10), Some(19), false), // 4 days, outside window
        ];
        let summary = svc.aggregate(&bills, "USD", today());
        assert_eq!(summary.due_soon_ids, vec![1, 2]);
    }

    #[test]
    fn test_paid_bills_counted_in_monthly_total_only() {
        let svc = service(Ok(vec![]));
        let bills = vec![
            bill(1, dec!(100), Some(20), true),
            bill(2, dec!(50), Some(20), false),
        ];
        let summary = svc.aggregate(&bills, "USD", today());
        assert_eq!(summary.total_monthly, dec!(150));
        assert_eq!(summary.unpaid_total, dec!(50));
        assert_eq!(summary.unpaid_count, 1);
    }

    #[test]
    fn test_day_of_month_projection_never_overdue() {
        let b = bill(1, dec!(10), Some(1), false);
        assert!(b.days_until_due(today()) >= 0);
        assert_ne!(b.due_status(today()), DueStatus::Overdue);
    }

    #[test]
    fn test_classify_signed_days() {
        assert_eq!(DueStatus::classify(-1, 3), DueStatus::Overdue);
        assert_eq!(DueStatus::classify(0, 3), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(3, 3), DueStatus::DueSoon);
        assert_eq!(DueStatus::classify(4, 3), DueStatus::Normal);
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty_summary() {
        let svc = service(Err(ApiError::Network("down".to_string()).into()));
        let summary = svc.get_summary("USD", today()).await.unwrap();
        assert_eq!(summary.count, 0);
    }
}
