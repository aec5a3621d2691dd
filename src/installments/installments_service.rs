use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::cards::CreditCard;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::installments_model::{Installment, InstallmentsSummary};

const UPCOMING_WINDOW_DAYS: i64 = 31;

/// Contract for the installments collection endpoint.
#[async_trait]
pub trait InstallmentRepositoryTrait: Send + Sync {
    async fn get_installments(&self) -> Result<Vec<Installment>>;
}

pub struct InstallmentsService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn InstallmentRepositoryTrait>,
}

impl InstallmentsService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn InstallmentRepositoryTrait>,
    ) -> Self {
        InstallmentsService {
            fx_service,
            repository,
        }
    }

    /// Pure roll-up; `cards` supplies the currency each plan inherits.
    pub fn aggregate(
        &self,
        installments: &[Installment],
        cards: &[CreditCard],
        display_currency: &str,
        today: NaiveDate,
    ) -> InstallmentsSummary {
        let mut total_remaining = Decimal::ZERO;
        let mut active_count = 0;
        let mut upcoming_ids = Vec::new();

        for installment in installments {
            total_remaining += self.fx_service.convert_currency(
                installment.remaining(),
                &installment.native_currency(cards),
                display_currency,
            );
            if installment.is_active() {
                active_count += 1;
                if let Some(days) = installment.days_until_end(today) {
                    if days <= UPCOMING_WINDOW_DAYS {
                        upcoming_ids.push(installment.id);
                    }
                }
            }
        }

        InstallmentsSummary {
            total_remaining,
            count: installments.len(),
            active_count,
            upcoming_ids,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(
        &self,
        cards: &[CreditCard],
        display_currency: &str,
        today: NaiveDate,
    ) -> Result<InstallmentsSummary> {
        let installments =
            degrade_to_empty(self.repository.get_installments().await, "installments")?;
        Ok(self.aggregate(&installments, cards, display_currency, today))
    }
}
