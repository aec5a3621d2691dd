use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::savings_model::{SavingsAccount, SavingsSummary};

/// Contract for the savings collection endpoint.
#[async_trait]
pub trait SavingsRepositoryTrait: Send + Sync {
    async fn get_savings_accounts(&self) -> Result<Vec<SavingsAccount>>;
}

pub struct SavingsService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn SavingsRepositoryTrait>,
}

impl SavingsService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn SavingsRepositoryTrait>,
    ) -> Self {
        SavingsService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched savings accounts.
    pub fn aggregate(&self, accounts: &[SavingsAccount], display_currency: &str) -> SavingsSummary {
        let mut total_saved = Decimal::ZERO;
        let mut total_goal = Decimal::ZERO;
        let mut with_goals_count = 0;

        for account in accounts {
            let currency = account.native_currency();
            total_saved +=
                self.fx_service
                    .convert_currency(account.balance(), currency, display_currency);
            if account.has_goal() {
                with_goals_count += 1;
                total_goal += self.fx_service.convert_currency(
                    account.goal_amount.unwrap_or_default(),
                    currency,
                    display_currency,
                );
            }
        }

        let overall_progress = if total_goal.is_zero() {
            Decimal::ZERO
        } else {
            (total_saved / total_goal * Decimal::ONE_HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION)
        };

        SavingsSummary {
            total_saved,
            total_goal,
            overall_progress,
            count: accounts.len(),
            with_goals_count,
            display_currency: display_currency.to_string(),
        }
    }

    pub async fn get_summary(&self, display_currency: &str) -> Result<SavingsSummary> {
        let accounts = degrade_to_empty(
            self.repository.get_savings_accounts().await,
            "savings accounts",
        )?;
        Ok(self.aggregate(&accounts, display_currency))
    }
}
