//! Fetch degradation and last-good state preservation.
//!
//! Concurrent per-domain fetches must not block each other: a failed leg
//! degrades to its empty identity so the rest of the view still renders.
//! Two failures are special-cased: 401 belongs to the session collaborator
//! and propagates unchanged, and 429 keeps previously rendered data
//! (stale-but-present beats empty).

use crate::errors::{ApiError, Error, Result};

/// Collapses a fetch result into records, an empty identity, or a
/// propagated error.
///
/// `Ok` passes through; `Unauthorized` and `RateLimited` propagate (the
/// session layer and [`ViewState`] handle those), as do denials that
/// demand an upgrade prompt; anything else logs and degrades to an
/// empty list.
pub fn degrade_to_empty<T>(result: Result<Vec<T>>, label: &str) -> Result<Vec<T>> {
    match result {
        Ok(records) => Ok(records),
        Err(err) if err.requires_upgrade() => Err(err),
        Err(err @ Error::Api(ApiError::Unauthorized)) => Err(err),
        Err(err @ Error::Api(ApiError::RateLimited)) => Err(err),
        Err(err) => {
            log::warn!("Fetching {} failed, rendering empty: {}", label, err);
            Ok(Vec::new())
        }
    }
}

/// [`degrade_to_empty`] for single aggregate payloads; the empty
/// identity is the type's `Default`.
pub fn degrade_to_default<T: Default>(result: Result<T>, label: &str) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) if err.requires_upgrade() => Err(err),
        Err(err @ Error::Api(ApiError::Unauthorized)) => Err(err),
        Err(err @ Error::Api(ApiError::RateLimited)) => Err(err),
        Err(err) => {
            log::warn!("Fetching {} failed, rendering empty: {}", label, err);
            Ok(T::default())
        }
    }
}

/// Outcome of applying a refresh to a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fresh data replaced the previous value.
    Updated,
    /// Rate limited; the previous value was kept and marked stale.
    PreservedStale,
    /// The fetch failed and nothing was ever loaded; the empty identity
    /// was substituted.
    DegradedEmpty,
}

/// Holds the last successfully aggregated value for a view.
///
/// Display-currency changes re-aggregate the held records in memory;
/// refreshes run through [`apply`](Self::apply) so rate limiting never
/// blanks an already-rendered view, and entitlement denials clear held
/// premium data instead of merely hiding it.
#[derive(Debug, Clone, Default)]
pub struct ViewState<T> {
    data: Option<T>,
    stale: bool,
}

impl<T: Default> ViewState<T> {
    pub fn new() -> Self {
        ViewState {
            data: None,
            stale: false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// True when the held value survived a rate-limited refresh.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Applies a refresh result.
    ///
    /// Errors that demand an upgrade prompt clear the held value (a
    /// downgraded user must not keep seeing previously fetched premium
    /// data) and propagate; 401 propagates untouched; 429 preserves the
    /// held value; any other failure substitutes the empty identity only
    /// when nothing was ever loaded.
    pub fn apply(&mut self, result: Result<T>) -> Result<RefreshOutcome> {
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.stale = false;
                Ok(RefreshOutcome::Updated)
            }
            Err(err) if err.requires_upgrade() => {
                self.data = None;
                self.stale = false;
                Err(err)
            }
            Err(err @ Error::Api(ApiError::Unauthorized)) => Err(err),
            Err(err) if err.preserves_state() && self.data.is_some() => {
                log::warn!("Rate limited, keeping previously rendered data");
                self.stale = true;
                Ok(RefreshOutcome::PreservedStale)
            }
            Err(err) => {
                log::warn!("Refresh failed: {}", err);
                if self.data.is_none() {
                    self.data = Some(T::default());
                }
                Ok(RefreshOutcome::DegradedEmpty)
            }
        }
    }

    /// Clears the held value, e.g. across a logout or tier downgrade.
    pub fn clear(&mut self) {
        self.data = None;
        self.stale = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EntitlementError;

    fn rate_limited<T>() -> Result<T> {
        Err(ApiError::RateLimited.into())
    }

    #[test]
    fn test_degrade_passes_through_ok() {
        let result: Result<Vec<i32>> = Ok(vec![1, 2]);
        assert_eq!(degrade_to_empty(result, "cards").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_degrade_maps_generic_failure_to_empty() {
        let result: Result<Vec<i32>> = Err(ApiError::Network("down".to_string()).into());
        assert!(degrade_to_empty(result, "cards").unwrap().is_empty());
    }

    #[test]
    fn test_degrade_propagates_unauthorized_and_rate_limit() {
        let result: Result<Vec<i32>> = Err(ApiError::Unauthorized.into());
        assert!(degrade_to_empty(result, "cards").is_err());
        let result: Result<Vec<i32>> = Err(ApiError::RateLimited.into());
        assert!(degrade_to_empty(result, "cards").is_err());
    }

    #[test]
    fn test_degrade_propagates_premium_denial() {
        let result: Result<Vec<i32>> =
            Err(ApiError::PremiumRequired("Premium feature".to_string()).into());
        assert!(degrade_to_empty(result, "stocks").unwrap_err().requires_upgrade());
    }

    #[test]
    fn test_rate_limit_preserves_last_good_value() {
        let mut state: ViewState<Vec<i32>> = ViewState::new();
        state.apply(Ok(vec![7])).unwrap();

        let outcome = state.apply(rate_limited()).unwrap();
        assert_eq!(outcome, RefreshOutcome::PreservedStale);
        assert_eq!(state.get(), Some(&vec![7]));
        assert!(state.is_stale());
    }

    #[test]
    fn test_rate_limit_with_no_prior_data_degrades_to_default() {
        let mut state: ViewState<Vec<i32>> = ViewState::new();
        let outcome = state.apply(rate_limited()).unwrap();
        assert_eq!(outcome, RefreshOutcome::DegradedEmpty);
        assert_eq!(state.get(), Some(&Vec::new()));
    }

    #[test]
    fn test_entitlement_denial_clears_held_premium_data() {
        let mut state: ViewState<Vec<i32>> = ViewState::new();
        state.apply(Ok(vec![42])).unwrap();

        let denied: Result<Vec<i32>> =
            Err(EntitlementError::PremiumRequired("Stocks".to_string()).into());
        let err = state.apply(denied).unwrap_err();
        assert!(err.requires_upgrade());
        assert_eq!(state.get(), None);
    }

    #[test]
    fn test_generic_failure_keeps_existing_data() {
        let mut state: ViewState<Vec<i32>> = ViewState::new();
        state.apply(Ok(vec![1])).unwrap();
        let outcome = state
            .apply(Err(ApiError::Network("down".to_string()).into()))
            .unwrap();
        assert_eq!(outcome, RefreshOutcome::DegradedEmpty);
        assert_eq!(state.get(), Some(&vec![1]));
    }
}
