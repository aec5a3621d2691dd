use chrono::{DateTime, Utc};

use crate::errors::{EntitlementError, Result};

use super::entitlements_model::{Entitlement, Feature, LimitCheck};

/// Free-tier caps per resource type. None means unlimited.
fn free_tier_limit(resource: &str) -> Option<u32> {
    match resource {
        "bank_accounts" => Some(2),
        "credit_cards" => Some(2),
        "expenses_per_month" => Some(50),
        "income_per_month" => Some(5),
        "goals" => Some(1),
        "bills" => Some(3),
        // Premium only
        "stocks" => Some(0),
        "recurring_transactions" => Some(0),
        _ => None,
    }
}

/// Rejects gated features before any data fetch happens.
///
/// Callers must short-circuit on the returned error: a denied aggregator
/// is never invoked, and stale premium data is cleared by the view layer
/// rather than hidden.
pub fn ensure_feature(
    entitlement: &Entitlement,
    feature: Feature,
    now: DateTime<Utc>,
) -> Result<()> {
    if entitlement.allows(feature, now) {
        Ok(())
    } else {
        log::debug!("Feature '{}' denied for current subscription", feature.name());
        Err(EntitlementError::PremiumRequired(feature.name().to_string()).into())
    }
}

/// Checks the current usage of a resource against the tier's cap.
pub fn check_limit(
    entitlement: &Entitlement,
    resource: &str,
    current: u32,
    now: DateTime<Utc>,
) -> LimitCheck {
    let premium = entitlement.is_premium(now);
    // A lapsed or expired premium subscription is capped like free.
    let limit = if premium {
        None
    } else {
        free_tier_limit(resource)
    };
    match limit {
        None => LimitCheck {
            allowed: true,
            current,
            limit: None,
            remaining: None,
        },
        Some(cap) => LimitCheck {
            allowed: current < cap,
            current,
            limit: Some(cap),
            remaining: Some(cap.saturating_sub(current)),
        },
    }
}
