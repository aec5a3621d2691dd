//! Combined debt view model.

use rust_decimal::Decimal;
use serde::Serialize;

/// Credit, installment and loan positions rolled into one view, in the
/// display currency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub total_credit_limit: Decimal,
    pub total_outstanding: Decimal,
    pub available_credit: Decimal,
    /// Outstanding over limit as a percentage, 1 dp. Zero limit reads zero.
    pub overall_utilization: Decimal,
    pub installment_debt: Decimal,
    pub loan_debt: Decimal,
    /// Card outstanding + installment remaining + loan remaining.
    pub total_debt: Decimal,
    pub cards_count: usize,
    pub installments_count: usize,
    pub active_installments_count: usize,
    pub loans_count: usize,
    pub active_loans_count: usize,
    pub display_currency: String,
}
