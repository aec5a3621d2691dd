//! Bills module - recurring bill due dates and payment urgency.

mod bills_model;
mod bills_service;

pub use bills_model::{Bill, BillsSummary, DueStatus};
pub use bills_service::{BillRepositoryTrait, BillsService};
