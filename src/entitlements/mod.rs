//! Entitlements module - subscription tiers, feature gate, usage limits.
//!
//! One capability-check library used for both the UI affordance and the
//! authoritative server-side enforcement; the client check is never the
//! source of truth.

mod entitlements_model;
mod entitlements_service;

pub use entitlements_model::{
    Entitlement, Feature, LimitCheck, SubscriptionStatus, SubscriptionTier,
};
pub use entitlements_service::{check_limit, ensure_feature};
