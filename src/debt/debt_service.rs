use std::sync::Arc;

use futures::join;
use rust_decimal::Decimal;

use crate::cards::{CardRepositoryTrait, CreditCard};
use crate::constants::{DEBT_VIEW_DEFAULT_CURRENCY, PERCENT_DECIMAL_PRECISION};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::installments::{Installment, InstallmentRepositoryTrait};
use crate::loans::{Loan, LoanRepositoryTrait};
use crate::view::degrade_to_empty;

use super::debt_model::DebtSummary;

/// Composes the combined credit & debt view from three independently
/// fetched legs.
pub struct DebtService {
    fx_service: Arc<dyn FxServiceTrait>,
    card_repository: Arc<dyn CardRepositoryTrait>,
    installment_repository: Arc<dyn InstallmentRepositoryTrait>,
    loan_repository: Arc<dyn LoanRepositoryTrait>,
}

impl DebtService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        card_repository: Arc<dyn CardRepositoryTrait>,
        installment_repository: Arc<dyn InstallmentRepositoryTrait>,
        loan_repository: Arc<dyn LoanRepositoryTrait>,
    ) -> Self {
        DebtService {
            fx_service,
            card_repository,
            installment_repository,
            loan_repository,
        }
    }

    /// The view defaults to SGD when no display currency is stored.
    pub fn default_display_currency() -> &'static str {
        DEBT_VIEW_DEFAULT_CURRENCY
    }

    /// Pure reduction over already-fetched legs. Installment currencies
    /// resolve through their linked card.
    pub fn aggregate(
        &self,
        cards: &[CreditCard],
        installments: &[Installment],
        loans: &[Loan],
        display_currency: &str,
    ) -> DebtSummary {
        let mut total_credit_limit = Decimal::ZERO;
        let mut total_outstanding = Decimal::ZERO;
        for card in cards {
            let currency = card.native_currency();
            total_credit_limit +=
                self.fx_service
                    .convert_currency(card.limit(), &currency, display_currency);
            total_outstanding +=
                self.fx_service
                    .convert_currency(card.balance(), &currency, display_currency);
        }

        let mut installment_debt = Decimal::ZERO;
        let mut active_installments_count = 0;
        for installment in installments {
            let currency = installment.native_currency(cards);
            installment_debt += self.fx_service.convert_currency(
                installment.remaining(),
                &currency,
                display_currency,
            );
            if installment.is_active() {
                active_installments_count += 1;
            }
        }

        let mut loan_debt = Decimal::ZERO;
        let mut active_loans_count = 0;
        for loan in loans {
            loan_debt += self.fx_service.convert_currency(
                loan.remaining(),
                &loan.native_currency(),
                display_currency,
            );
            if loan.is_active() {
                active_loans_count += 1;
            }
        }

        let overall_utilization = if total_credit_limit.is_zero() {
            Decimal::ZERO
        } else {
            (total_outstanding / total_credit_limit * Decimal::ONE_HUNDRED)
                .round_dp(PERCENT_DECIMAL_PRECISION)
        };

        DebtSummary {
            total_credit_limit,
            total_outstanding,
            available_credit: total_credit_limit - total_outstanding,
            overall_utilization,
            installment_debt,
            loan_debt,
            total_debt: total_outstanding + installment_debt + loan_debt,
            cards_count: cards.len(),
            installments_count: installments.len(),
            active_installments_count,
            loans_count: loans.len(),
            active_loans_count,
            display_currency: display_currency.to_string(),
        }
    }

    /// Fetches all three legs concurrently; a failed leg degrades to
    /// empty without blanking its siblings.
    pub async fn get_summary(&self, display_currency: &str) -> Result<DebtSummary> {
        let (cards, installments, loans) = join!(
            self.card_repository.get_cards(),
            self.installment_repository.get_installments(),
            self.loan_repository.get_loans(),
        );
        let cards = degrade_to_empty(cards, "credit cards")?;
        let installments = degrade_to_empty(installments, "installments")?;
        let loans = degrade_to_empty(loans, "loans")?;
        Ok(self.aggregate(&cards, &installments, &loans, display_currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::fx::CurrencyConverter;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct MockCardRepository(Result<Vec<CreditCard>>);
    #[async_trait]
    impl CardRepositoryTrait for MockCardRepository {
        async fn get_cards(&self) -> Result<Vec<CreditCard>> {
            clone_result(&self.0)
        }
    }

    struct MockInstallmentRepository(Result<Vec<Installment>>);
    #[async_trait]
    impl InstallmentRepositoryTrait for MockInstallmentRepository {
        async fn get_installments(&self) -> Result<Vec<Installment>> {
            clone_result(&self.0)
        }
    }

    struct MockLoanRepository(Result<Vec<Loan>>);
    #[async_trait]
    impl LoanRepositoryTrait for MockLoanRepository {
        async fn get_loans(&self) -> Result<Vec<Loan>> {
            clone_result(&self.0)
        }
    }

    fn clone_result<T: Clone>(result: &Result<Vec<T>>) -> Result<Vec<T>> {
        match result {
            Ok(v) => Ok(v.clone()),
            Err(_) => Err(ApiError::Network("down".to_string()).into()),
        }
    }

    fn card(id: i64, limit: Decimal, balance: Decimal, currency: &str) -> CreditCard {
        CreditCard {
            id,
            card_name: None,
            card_type: None,
            bank_name: None,
            country: None,
            currency: Some(currency.to_string()),
            credit_limit: Some(limit),
            current_balance: Some(balance),
            due_date: None,
        }
    }

    fn installment(card_id: Option<i64>, remaining: Decimal, active: bool) -> Installment {
        Installment {
            id: 1,
            credit_card_id: card_id,
            description: None,
            total_amount: None,
            remaining_amount: Some(remaining),
            monthly_payment: None,
            status: Some(if active { "active" } else { "completed" }.to_string()),
            end_date: None,
        }
    }

    fn loan(remaining: Decimal, active: bool) -> Loan {
        Loan {
            id: 1,
            loan_name: None,
            loan_type: None,
            country: None,
            currency: Some("USD".to_string()),
            principal_amount: None,
            remaining_balance: Some(remaining),
            monthly_payment: None,
            status: Some(if active { "active" } else { "paid" }.to_string()),
            end_date: None,
        }
    }

    fn service(
        cards: Result<Vec<CreditCard>>,
        installments: Result<Vec<Installment>>,
        loans: Result<Vec<Loan>>,
    ) -> DebtService {
        DebtService::new(
            Arc::new(CurrencyConverter::new()),
            Arc::new(MockCardRepository(cards)),
            Arc::new(MockInstallmentRepository(installments)),
            Arc::new(MockLoanRepository(loans)),
        )
    }

    #[test]
    fn test_combined_totals_in_display_currency() {
        let svc = service(Ok(vec![]), Ok(vec![]), Ok(vec![]));
        let cards = vec![card(1, dec!(10000), dec!(2000), "SGD")];
        let installments = vec![installment(Some(1), dec!(1350), true)]; // SGD via card
        let loans = vec![loan(dec!(1000), true)]; // USD

        let summary = svc.aggregate(&cards, &installments, &loans, "SGD");
        assert_eq!(summary.total_credit_limit, dec!(10000));
        assert_eq!(summary.total_outstanding, dec!(2000));
        assert_eq!(summary.available_credit, dec!(8000));
        assert_eq!(summary.overall_utilization, dec!(20.0));
        assert_eq!(summary.installment_debt, dec!(1350));
        assert_eq!(summary.loan_debt, dec!(1350)); // 1000 USD at 1.35
        assert_eq!(summary.total_debt, dec!(4700));
    }

    #[test]
    fn test_zero_limit_reads_zero_utilization() {
        let svc = service(Ok(vec![]), Ok(vec![]), Ok(vec![]));
        let summary = svc.aggregate(&[], &[], &[], "SGD");
        assert_eq!(summary.overall_utilization, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_failed_leg_degrades_without_blanking_siblings() {
        let svc = service(
            Ok(vec![card(1, dec!(1000), dec!(100), "USD")]),
            Err(ApiError::Network("down".to_string()).into()),
            Ok(vec![loan(dec!(500), true)]),
        );
        let summary = svc.get_summary("USD").await.unwrap();
        assert_eq!(summary.cards_count, 1);
        assert_eq!(summary.installments_count, 0);
        assert_eq!(summary.loan_debt, dec!(500));
    }

    #[test]
    fn test_default_display_currency_is_sgd() {
        assert_eq!(DebtService::default_display_currency(), "SGD");
    }
}
