use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::entitlements::{ensure_feature, Entitlement, Feature};
use crate::errors::Result;
use crate::fx::FxServiceTrait;
use crate::view::degrade_to_empty;

use super::stocks_model::{Stock, StockPosition, StocksSummary};

/// Contract for the stocks collection endpoint.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    async fn get_stocks(&self) -> Result<Vec<Stock>>;
}

pub struct StocksService {
    fx_service: Arc<dyn FxServiceTrait>,
    repository: Arc<dyn StockRepositoryTrait>,
}

impl StocksService {
    pub fn new(
        fx_service: Arc<dyn FxServiceTrait>,
        repository: Arc<dyn StockRepositoryTrait>,
    ) -> Self {
        StocksService {
            fx_service,
            repository,
        }
    }

    /// Pure reduction over already-fetched holdings.
    pub fn aggregate(&self, stocks: &[Stock], display_currency: &str) -> StocksSummary {
        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut positions = Vec::with_capacity(stocks.len());

        for stock in stocks {
            let currency = stock.native_currency();
            let value = self
                .fx_service
                .convert_currency(stock.value(), currency, display_currency);
            let cost = self
                .fx_service
                .convert_currency(stock.cost(), currency, display_currency);
            total_value += value;
            total_cost += cost;
            positions.push(StockPosition {
                id: stock.id,
                symbol: stock.symbol.clone().unwrap_or_default(),
                value,
                cost,
                gain: value - cost,
                gain_percent: stock.gain_percent(),
            });
        }

        StocksSummary {
            total_value,
            total_cost,
            total_gain: total_value - total_cost,
            count: stocks.len(),
            positions,
            display_currency: display_currency.to_string(),
        }
    }

    /// Entitlement is checked BEFORE the fetch; a free tier never hits
    /// the stocks endpoint. The denial error carries the upgrade prompt.
    pub async fn get_summary(
        &self,
        entitlement: &Entitlement,
        display_currency: &str,
        now: DateTime<Utc>,
    ) -> Result<StocksSummary> {
        ensure_feature(entitlement, Feature::Stocks, now)?;
        let stocks = degrade_to_empty(self.repository.get_stocks().await, "stocks")?;
        Ok(self.aggregate(&stocks, display_currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::fx::CurrencyConverter;
    use rust_decimal_macros::dec;

    struct MockStockRepository {
        result: std::sync::Mutex<Option<Result<Vec<Stock>>>>,
        called: std::sync::atomic::AtomicBool,
    }

    #[async_trait]
    impl StockRepositoryTrait for MockStockRepository {
        async fn get_stocks(&self) -> Result<Vec<Stock>> {
            self.called
                .store(true, std::sync::atomic::Ordering::SeqCst);
            self.result.lock().unwrap().take().unwrap()
        }
    }

    fn stock(shares: Decimal, purchase: Decimal, current: Option<Decimal>) -> Stock {
        Stock {
            id: 1,
            symbol: Some("AAPL".to_string()),
            shares: Some(shares),
            purchase_price: Some(purchase),
            current_price: current,
            currency: Some("USD".to_string()),
        }
    }

    fn service(result: Result<Vec<Stock>>) -> (StocksService, Arc<MockStockRepository>) {
        let repo = Arc::new(MockStockRepository {
            result: std::sync::Mutex::new(Some(result)),
            called: std::sync::atomic::AtomicBool::new(false),
        });
        (
            StocksService::new(Arc::new(CurrencyConverter::new()), repo.clone()),
            repo,
        )
    }

    #[test]
    fn test_portfolio_totals_and_gain() {
        let (svc, _) = service(Ok(vec![]));
        let stocks = vec![
            stock(dec!(10), dec!(100), Some(dec!(150))),
            stock(dec!(5), dec!(200), None), // no quote, valued at cost
        ];
        let summary = svc.aggregate(&stocks, "USD");
        assert_eq!(summary.total_value, dec!(2500));
        assert_eq!(summary.total_cost, dec!(2000));
        assert_eq!(summary.total_gain, dec!(500));
    }

    #[test]
    fn test_gain_percent_guards_zero_cost() {
        let s = stock(dec!(10), dec!(0), Some(dec!(150)));
        assert_eq!(s.gain_percent(), Decimal::ZERO);

        let s = stock(dec!(10), dec!(100), Some(dec!(150)));
        assert_eq!(s.gain_percent(), dec!(50.0));
    }

    #[tokio::test]
    async fn test_free_tier_denied_before_fetch() {
        let (svc, repo) = service(Ok(vec![]));
        let err = svc
            .get_summary(&Entitlement::free(), "USD", Utc::now())
            .await
            .unwrap_err();
        assert!(err.requires_upgrade());
        assert!(!repo.called.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_premium_fetches_and_aggregates() {
        let (svc, _) = service(Ok(vec![stock(dec!(1), dec!(100), Some(dec!(110)))]));
        let summary = svc
            .get_summary(&Entitlement::premium(), "USD", Utc::now())
            .await
            .unwrap();
        assert_eq!(summary.total_gain, dec!(10));
    }

    #[tokio::test]
    async fn test_server_side_premium_denial_maps_to_upgrade_error() {
        let (svc, _) = service(Err(ApiError::PremiumRequired(
            "Premium feature".to_string(),
        )
        .into()));
        let err = svc
            .get_summary(&Entitlement::premium(), "USD", Utc::now())
            .await
            .unwrap_err();
        assert!(err.requires_upgrade());
    }
}
