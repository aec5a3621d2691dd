use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{CARD_DUE_SOON_DAYS, HIGH_UTILIZATION_THRESHOLD, PERCENT_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::cards_model::{CardsSummary, CreditCard};

/// Contract for the cards collection endpoint.
#[async_trait]
pub trait CardRepositoryTrait: Send + Sync {
    async fn get_cards(&self) -> Result<Vec<CreditCard>>;
}

pub struct CardsService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn CardRepositoryTrait>,
}

impl CardsService {
    pub fn new(fx_service: Arc<dyn FxServiceTrait>, repository: Arc<dyn CardRepositoryTrait>) -> Self {
        CardsService {
            fx_service,
            repository,
        }
    }

    /// Pure roll-up over already-fetched cards.
    pub fn aggregate(
        &self,
        cards: &[CreditCard],
        display_currency: &str,
        today: NaiveDate,
    ) -> CardsSummary {
        let mut total_credit_limit = Decimal::ZERO;
        let mut total_outstanding = Decimal::ZERO;
        let mut upcoming_payment_ids = Vec::new();
        let mut high_utilization_ids = Vec::new();

        for card in cards {
            let native = card.native_currency();
            total_credit_limit +=
                self.fx_service
                    .convert_currency(card.limit(), &native, display_currency);
            total_outstanding +=
                self.fx_service
                    .convert_currency(card.balance(), &native, display_currency);

            if let Some(days) = card.days_until_due(today) {
                if (0..=CARD_DUE_SOON_DAYS).contains(&days) {
                    upcoming_payment_ids.push(card.id);
                }
            }
            if card.utilization() >= HIGH_UTILIZATION_THRESHOLD {
                high_utilization_ids.push(card.id);
            }
        }

        let overall_utilization = if total_credit_limit.is_zero() {
            Decimal::ZERO
        } else {
            (total_outstanding / total_credit_limit * Decimal::ONE_HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION)
        };

        CardsSummary {
            total_credit_limit,
            total_outstanding,
            available_credit: total_credit_limit - total_outstanding,
            overall_utilization,
            count: cards.len(),
            upcoming_payment_ids,
            high_utilization_ids,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(
        &self,
        display_currency: &str,
        today: NaiveDate,
    ) -> Result<CardsSummary> {
        let cards = degrade_to_empty(self.repository.get_cards().await, "credit cards")?;
        Ok(self.aggregate(&cards, display_currency, today))
    }
}
