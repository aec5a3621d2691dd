use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::accounts_model::{AccountsSummary, BankAccount};

/// Contract for the bank accounts collection endpoint.
#[async_trait]
pub trait BankAccountRepositoryTrait: Send + Sync {
    async fn get_bank_accounts(&self) -> Result<Vec<BankAccount>>;
}

pub struct AccountsService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn BankAccountRepositoryTrait>,
}

impl AccountsService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn BankAccountRepositoryTrait>,
    ) -> Self {
        AccountsService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched accounts. Safe to re-run on
    /// every display-currency change without refetching.
    pub fn aggregate(&self, accounts: &[BankAccount], display_currency: &str) -> AccountsSummary {
        let mut total_balance = Decimal::ZERO;
        let mut by_type: HashMap<String, usize> = HashMap::new();

        for account in accounts {
            total_balance += self.fx_service.convert_currency(
                account.balance(),
                &account.native_currency(),
                display_currency,
            );
            let account_type = account
                .account_type
                .clone()
                .unwrap_or_else(|| "Other".to_string());
            *by_type.entry(account_type).or_insert(0) += 1;
        }

        AccountsSummary {
            total_balance,
            count: accounts.len(),
            by_type,
            display_currency: display_currency.to_string(),
        }
    }

    /// Fetches and aggregates; a failed fetch degrades to the empty
    /// summary so sibling views still render.
    pub async fn get_summary(&self, display_currency: &str) -> Result<AccountsSummary> {
        let accounts =
            degrade_to_empty(self.repository.get_bank_accounts().await, "bank accounts")?;
        Ok(self.aggregate(&accounts, display_currency))
    }
}
