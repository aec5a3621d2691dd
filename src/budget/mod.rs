//! Budget module - monthly category limits vs actual spend, premium gated.

mod budget_model;
mod budget_service;

pub use budget_model::{Budget, BudgetLine, BudgetSummary};
pub use budget_service::{BudgetRepositoryTrait, BudgetService};
