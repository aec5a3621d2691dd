//! Installments module - models and card-linked currency roll-ups.

mod installments_model;
mod installments_service;

pub use installments_model::{Installment, InstallmentsSummary};
pub use installments_service::{InstallmentRepositoryTrait, InstallmentsService};
