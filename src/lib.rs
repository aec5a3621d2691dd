//! Fintrack Core - Multi-currency aggregation and derived metrics.
//!
//! This crate contains the aggregation core of the Fintrack personal
//! finance tracker: converting heterogeneous per-record currencies into a
//! unified display currency, per-domain roll-ups (totals, utilization,
//! progress), the dashboard health score, and subscription feature gating.
//! It owns no persistence; raw records arrive from REST collaborators
//! behind the repository traits defined per module.

pub mod accounts;
pub mod bills;
pub mod budget;
pub mod cards;
pub mod constants;
pub mod dashboard;
pub mod debt;
pub mod entitlements;
pub mod errors;
pub mod fx;
pub mod income;
pub mod installments;
pub mod loans;
pub mod savings;
pub mod settings;
pub mod spending;
pub mod stocks;
pub mod utils;
pub mod view;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
