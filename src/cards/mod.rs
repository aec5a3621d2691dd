//! Credit/debit cards module - models, per-card metrics, roll-ups.

mod cards_model;
mod cards_service;

pub use cards_model::{CardsSummary, CreditCard};
pub use cards_service::{CardRepositoryTrait, CardsService};
