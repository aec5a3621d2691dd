use rust_decimal::Decimal;

/// Contract for currency conversion and metadata, injected into every
/// aggregator. Conversions are pure table lookups and never fail; unknown
/// codes fall back to a USD peg.
pub trait FxServiceTrait: Send + Sync {
    /// Converts an amount between two currency codes. No rounding.
    fn convert_currency(&self, amount: Decimal, from: &str, to: &str) -> Decimal;

    /// Sorted list of all known currency codes.
    fn list_currencies(&self) -> Vec<&'static str>;

    /// Display name for a code, defaulting to the code itself.
    fn currency_name<'a>(&self, code: &'a str) -> &'a str;
}
