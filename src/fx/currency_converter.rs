use std::collections::HashMap;

use rust_decimal::Decimal;

use super::currency_table::{self, EXCHANGE_RATES};
use super::fx_traits::FxServiceTrait;

/// Outcome of a rate lookup for a single currency code.
///
/// Unknown codes are deliberately treated as USD-pegged (rate 1) instead
/// of failing the conversion; the tagged result keeps that fallback
/// observable rather than a silent magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLookup {
    /// The code was found in the rate table.
    Resolved(Decimal),
    /// The code is unknown; rate 1 was substituted. Lossy by design.
    DefaultedToUsd,
}

impl RateLookup {
    pub fn rate(&self) -> Decimal {
        match self {
            RateLookup::Resolved(rate) => *rate,
            RateLookup::DefaultedToUsd => Decimal::ONE,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, RateLookup::DefaultedToUsd)
    }
}

/// A calculator for currency conversions over a static rate table.
///
/// Every conversion is routed through USD as the single pivot, so any two
/// paths between the same pair trivially agree. The converter applies no
/// rounding; callers format for display.
pub struct CurrencyConverter {
    /// Currency code -> units per USD.
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// Creates a converter over the built-in rate table.
    pub fn new() -> Self {
        Self::with_rates(
            EXCHANGE_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate)),
        )
    }

    /// Creates a converter over an explicit rate table (units per USD).
    pub fn with_rates(rates: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        CurrencyConverter {
            rates: rates.into_iter().collect(),
        }
    }

    /// Looks up the units-per-USD rate for a code, tagging whether the
    /// USD-pegged fallback was taken.
    pub fn resolve_rate(&self, code: &str) -> RateLookup {
        match self.rates.get(code) {
            Some(rate) => RateLookup::Resolved(*rate),
            None => {
                log::debug!("Unknown currency '{}', defaulting rate to 1 (USD peg)", code);
                RateLookup::DefaultedToUsd
            }
        }
    }

    /// Converts an amount between two currency codes via the USD pivot.
    ///
    /// Zero converts to zero for any pair, and identical codes return the
    /// amount unchanged (exact identity, never a rounded re-conversion).
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.convert_resolved(amount, from, to).0
    }

    /// Like [`convert`](Self::convert), additionally reporting which
    /// lookup path each side of the pair took.
    pub fn convert_resolved(
        &self,
        amount: Decimal,
        from: &str,
        to: &str,
    ) -> (Decimal, RateLookup, RateLookup) {
        if amount.is_zero() {
            return (
                Decimal::ZERO,
                self.resolve_rate(from),
                self.resolve_rate(to),
            );
        }
        let from_lookup = self.resolve_rate(from);
        let to_lookup = self.resolve_rate(to);
        if from == to {
            return (amount, from_lookup, to_lookup);
        }

        let usd_amount = amount / from_lookup.rate();
        (usd_amount * to_lookup.rate(), from_lookup, to_lookup)
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl FxServiceTrait for CurrencyConverter {
    fn convert_currency(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        self.convert(amount, from, to)
    }

    fn list_currencies(&self) -> Vec<&'static str> {
        currency_table::list_currencies()
    }

    fn currency_name<'a>(&self, code: &'a str) -> &'a str {
        currency_table::currency_name(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity_is_exact() {
        let converter = CurrencyConverter::new();
        for amount in [dec!(0), dec!(123.456789), dec!(-50.5)] {
            assert_eq!(converter.convert(amount, "PKR", "PKR"), amount);
        }
        // Identity holds even for unknown codes.
        assert_eq!(converter.convert(dec!(42), "XXX", "XXX"), dec!(42));
    }

    #[test]
    fn test_zero_converts_to_zero() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.convert(Decimal::ZERO, "USD", "SGD"), Decimal::ZERO);
        assert_eq!(converter.convert(Decimal::ZERO, "EUR", "JPY"), Decimal::ZERO);
    }

    #[test]
    fn test_usd_to_sgd_uses_table_rate() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.convert(dec!(100), "USD", "SGD"), dec!(135));
    }

    #[test]
    fn test_cross_rate_pivots_through_usd() {
        let converter = CurrencyConverter::with_rates([
            ("EUR".to_string(), dec!(0.92)),
            ("SGD".to_string(), dec!(1.35)),
        ]);
        // 92 EUR -> 100 USD -> 135 SGD
        assert_eq!(converter.convert(dec!(92), "EUR", "SGD"), dec!(135));
    }

    #[test]
    fn test_unknown_currency_defaults_to_usd_peg() {
        let converter = CurrencyConverter::new();
        let (amount, from, to) = converter.convert_resolved(dec!(100), "XXX", "SGD");
        assert_eq!(amount, dec!(135));
        assert!(from.is_defaulted());
        assert_eq!(to, RateLookup::Resolved(dec!(1.35)));
    }

    #[test]
    fn test_resolve_rate_tags_lookup_path() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.resolve_rate("SGD"), RateLookup::Resolved(dec!(1.35)));
        assert_eq!(converter.resolve_rate("ZZZ"), RateLookup::DefaultedToUsd);
        assert_eq!(converter.resolve_rate("ZZZ").rate(), Decimal::ONE);
    }

    proptest! {
        #[test]
        fn prop_round_trip_through_pivot(cents in 1i64..10_000_000) {
            let converter = CurrencyConverter::new();
            let amount = Decimal::new(cents, 2);
            for (from, to) in [("PKR", "SGD"), ("EUR", "JPY"), ("USD", "KWD")] {
                let there = converter.convert(amount, from, to);
                let back = converter.convert(there, to, from);
                let tolerance = dec!(0.000001);
                prop_assert!((back - amount).abs() <= tolerance,
                    "{} {}->{}->{} came back as {}", amount, from, to, from, back);
            }
        }

        #[test]
        fn prop_identity_for_any_amount(cents in -10_000_000i64..10_000_000) {
            let converter = CurrencyConverter::new();
            let amount = Decimal::new(cents, 2);
            prop_assert_eq!(converter.convert(amount, "THB", "THB"), amount);
        }
    }
}
