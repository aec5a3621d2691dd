//! Stocks module - portfolio valuation, premium gated.

mod stocks_model;
mod stocks_service;

pub use stocks_model::{Stock, StockPosition, StocksSummary};
pub use stocks_service::{StockRepositoryTrait, StocksService};
