use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::loans_model::{Loan, LoansSummary};

/// End dates within roughly a month count as upcoming.
const UPCOMING_WINDOW_DAYS: i64 = 31;

/// Contract for the loans collection endpoint.
#[async_trait]
pub trait LoanRepositoryTrait: Send + Sync {
    async fn get_loans(&self) -> Result<Vec<Loan>>;
}

pub struct LoansService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn LoanRepositoryTrait>,
}

impl LoansService {
    pub fn new(fx_service: Arc<dyn FxServiceTrait>, repository: Arc<dyn LoanRepositoryTrait>) -> Self {
        LoansService {
            fx_service,
            repository,
        }
    }

    /// Pure roll-up over already-fetched loans.
    pub fn aggregate(&self, loans: &[Loan], display_currency: &str, today: NaiveDate) -> LoansSummary {
        let mut total_remaining = Decimal::ZERO;
        let mut total_paid_down = Decimal::ZERO;
        let mut active_count = 0;
        let mut upcoming_ids = Vec::new();

        for loan in loans {
            let native = loan.native_currency();
            total_remaining +=
                self.fx_service
                    .convert_currency(loan.remaining(), &native, display_currency);
            total_paid_down +=
                self.fx_service
                    .convert_currency(loan.paid_down(), &native, display_currency);
            if loan.is_active() {
                active_count += 1;
                if let Some(days) = loan.days_until_end(today) {
                    if days <= UPCOMING_WINDOW_DAYS {
                        upcoming_ids.push(loan.id);
                    }
                }
            }
        }

        LoansSummary {
            total_remaining,
            total_paid_down,
            count: loans.len(),
            active_count,
            upcoming_ids,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(&self, display_currency: &str, today: NaiveDate) -> Result<LoansSummary> {
        let loans = degrade_to_empty(self.repository.get_loans().await, "loans")?;
        Ok(self.aggregate(&loans, display_currency, today))
    }
}
