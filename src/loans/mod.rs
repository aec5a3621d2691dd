//! Loans module - models and remaining-balance roll-ups.

mod loans_model;
mod loans_service;

pub use loans_model::{Loan, LoansSummary};
pub use loans_service::{LoanRepositoryTrait, LoansService};
