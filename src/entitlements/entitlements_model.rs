//! Entitlement domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Cancelled,
    #[serde(rename = "past_due")]
    PastDue,
    #[serde(other)]
    Unknown,
}

/// Subscription entitlement carried on the authenticated user object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entitlement {
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default)]
    pub subscription_expires_at: Option<DateTime<Utc>>,
}

impl Entitlement {
    pub fn free() -> Self {
        Entitlement::default()
    }

    pub fn premium() -> Self {
        Entitlement {
            subscription_tier: SubscriptionTier::Premium,
            subscription_status: SubscriptionStatus::Active,
            subscription_expires_at: None,
        }
    }

    /// Premium tier AND active status are both required; tier alone is
    /// insufficient when the status has lapsed. An expiry in the past
    /// also revokes premium.
    pub fn is_premium(&self, now: DateTime<Utc>) -> bool {
        if self.subscription_tier != SubscriptionTier::Premium {
            return false;
        }
        if self.subscription_status != SubscriptionStatus::Active {
            return false;
        }
        match self.subscription_expires_at {
            Some(expires_at) => expires_at >= now,
            None => true,
        }
    }

    /// Whether this entitlement grants access to a feature. A lapsed
    /// premium subscription keeps the free features only.
    pub fn allows(&self, feature: Feature, now: DateTime<Utc>) -> bool {
        self.is_premium(now) || !feature.is_premium()
    }
}

/// Application features subject to gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Dashboard,
    BankAccounts,
    CreditCards,
    Expenses,
    Income,
    Savings,
    Goals,
    Bills,
    ExportCsv,
    Stocks,
    Budget,
    RecurringTransactions,
}

impl Feature {
    /// Features reserved for the premium tier.
    pub fn is_premium(&self) -> bool {
        matches!(
            self,
            Feature::Stocks | Feature::Budget | Feature::RecurringTransactions
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Dashboard => "Dashboard",
            Feature::BankAccounts => "Bank Accounts",
            Feature::CreditCards => "Credit Cards",
            Feature::Expenses => "Expenses",
            Feature::Income => "Income",
            Feature::Savings => "Savings",
            Feature::Goals => "Goals",
            Feature::Bills => "Bill Reminders",
            Feature::ExportCsv => "CSV Export",
            Feature::Stocks => "Stock Portfolio Tracking",
            Feature::Budget => "Budget Planning",
            Feature::RecurringTransactions => "Recurring Transactions",
        }
    }
}

/// Result of a usage-limit check for one resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitCheck {
    pub allowed: bool,
    pub current: u32,
    /// None means unlimited.
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
}
