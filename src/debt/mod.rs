//! Debt module - combined credit, installment and loan view.

mod debt_model;
mod debt_service;

pub use debt_model::DebtSummary;
pub use debt_service::DebtService;
