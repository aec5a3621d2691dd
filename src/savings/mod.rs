//! Savings module - savings accounts and goal progress.

mod savings_model;
mod savings_service;

pub use savings_model::{SavingsAccount, SavingsSummary};
pub use savings_service::{SavingsRepositoryTrait, SavingsService};
