use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Global fallback when a record resolves no currency of its own.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Default display currency for the combined credit & debt view.
pub const DEBT_VIEW_DEFAULT_CURRENCY: &str = "SGD";

/// Decimal precision for display amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for percentages (utilization, progress, savings rate)
pub const PERCENT_DECIMAL_PRECISION: u32 = 1;

/// Card payments within this many days count as upcoming.
pub const CARD_DUE_SOON_DAYS: i64 = 7;

/// Bills within this many days count as due soon.
pub const BILL_DUE_SOON_DAYS: i64 = 3;

/// Sort key for items with no due date; sorts them after everything real.
pub const MISSING_DUE_SORT_KEY: i64 = 999;

/// Minimum payment heuristic: 2% of the balance, floor of 25 in the
/// card's native currency.
pub const MINIMUM_PAYMENT_RATE: Decimal = dec!(0.02);
pub const MINIMUM_PAYMENT_FLOOR: Decimal = dec!(25);

/// Utilization percentage at or above which a card is flagged.
pub const HIGH_UTILIZATION_THRESHOLD: Decimal = dec!(80);
