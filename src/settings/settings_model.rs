//! Settings domain models.

use serde::{Deserialize, Serialize};

use crate::constants::FALLBACK_CURRENCY;

/// Display preferences loaded once at startup and saved on change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
    pub font_size: String,
    /// Default display currency for aggregated views.
    pub default_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "light".to_string(),
            font_size: "medium".to_string(),
            default_currency: FALLBACK_CURRENCY.to_string(),
        }
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub font_size: Option<String>,
    pub default_currency: Option<String>,
}
