//! Core error types for the Fintrack aggregation engine.
//!
//! Transport-specific failures (HTTP status codes from the REST
//! collaborators) are normalized into [`ApiError`] by the fetch layer;
//! entitlement denials are a distinct kind so callers can show an upgrade
//! prompt instead of a generic failure.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Entitlement check failed: {0}")]
    Entitlement(#[from] EntitlementError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error should surface as an upgrade prompt rather than
    /// a generic failure. Covers both the local entitlement check and a
    /// server-side 403 "Premium feature" rejection after an optimistic
    /// client-side pass.
    pub fn requires_upgrade(&self) -> bool {
        matches!(
            self,
            Error::Entitlement(EntitlementError::PremiumRequired(_))
                | Error::Api(ApiError::PremiumRequired(_))
        )
    }

    /// True when previously rendered data should be preserved instead of
    /// cleared (rate limiting; stale-but-present beats empty).
    pub fn preserves_state(&self) -> bool {
        matches!(self, Error::Api(ApiError::RateLimited))
    }
}

/// Normalized REST collaborator failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 429; caller keeps last-good data and warns the user.
    #[error("Too many requests, please wait a moment and try again")]
    RateLimited,

    /// 401; not handled here, propagated to the session collaborator.
    #[error("Session expired or not authenticated")]
    Unauthorized,

    /// 403 with a "Premium feature" body.
    #[error("'{0}' is a premium feature")]
    PremiumRequired(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Maps an HTTP status (plus response message) onto an error kind.
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::PremiumRequired(message.to_string()),
            404 => ApiError::NotFound(message.to_string()),
            429 => ApiError::RateLimited,
            _ => ApiError::Http {
                status,
                message: message.to_string(),
            },
        }
    }
}

/// Subscription entitlement failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntitlementError {
    #[error("'{0}' requires an active premium subscription")]
    PremiumRequired(String),

    #[error("Free tier limit reached for {resource} ({limit} allowed)")]
    LimitReached { resource: String, limit: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert_eq!(ApiError::from_status(429, ""), ApiError::RateLimited);
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(403, "Premium feature"),
            ApiError::PremiumRequired("Premium feature".to_string())
        );
        assert!(matches!(
            ApiError::from_status(500, "boom"),
            ApiError::Http { status: 500, .. }
        ));
    }

    #[test]
    fn test_requires_upgrade_covers_both_paths() {
        let local: Error = EntitlementError::PremiumRequired("Stocks".to_string()).into();
        let remote: Error = ApiError::PremiumRequired("Premium feature".to_string()).into();
        let other: Error = ApiError::RateLimited.into();
        assert!(local.requires_upgrade());
        assert!(remote.requires_upgrade());
        assert!(!other.requires_upgrade());
    }

    #[test]
    fn test_rate_limited_preserves_state() {
        let err: Error = ApiError::RateLimited.into();
        assert!(err.preserves_state());
        let err: Error = ApiError::Unauthorized.into();
        assert!(!err.preserves_state());
    }
}
