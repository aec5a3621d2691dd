//! FX module - static rate table, USD-pivot converter, currency metadata.

mod currency_converter;
mod currency_table;
mod fx_traits;

pub use currency_converter::{CurrencyConverter, RateLookup};
pub use currency_table::{
    currency_for_country, currency_name, list_currencies, resolve_currency, EXCHANGE_RATES,
};
pub use fx_traits::FxServiceTrait;
