//! Bank accounts module - models, aggregation service, repository trait.

mod accounts_model;
mod accounts_service;

pub use accounts_model::{AccountsSummary, BankAccount};
pub use accounts_service::{AccountsService, BankAccountRepositoryTrait};
