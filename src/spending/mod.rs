//! Spending module - expense records and category roll-ups.

mod spending_model;
mod spending_service;

pub use spending_model::{Expense, SpendingSummary};
pub use spending_service::{ExpenseRepositoryTrait, SpendingService};
