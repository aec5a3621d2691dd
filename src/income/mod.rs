//! Income module - income records and source roll-ups.

mod income_model;
mod income_service;

pub use income_model::{Income, IncomeSummary};
pub use income_service::{IncomeRepositoryTrait, IncomeService};
