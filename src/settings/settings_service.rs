use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::{Error, Result};
use crate::fx::list_currencies;

use super::settings_model::{Settings, SettingsUpdate};

const THEME_KEY: &str = "theme";
const FONT_SIZE_KEY: &str = "font_size";
const DEFAULT_CURRENCY_KEY: &str = "default_currency";

/// Contract for the settings key/value store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    async fn get_setting(&self, key: &str) -> Result<Option<String>>;
    async fn update_setting(&self, key: &str, value: &str) -> Result<()>;
}

pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService { repository }
    }

    /// Loads all preferences, filling defaults for unset keys.
    pub async fn get_settings(&self) -> Result<Settings> {
        let defaults = Settings::default();
        Ok(Settings {
            theme: self
                .repository
                .get_setting(THEME_KEY)
                .await?
                .unwrap_or(defaults.theme),
            font_size: self
                .repository
                .get_setting(FONT_SIZE_KEY)
                .await?
                .unwrap_or(defaults.font_size),
            default_currency: self
                .repository
                .get_setting(DEFAULT_CURRENCY_KEY)
                .await?
                .unwrap_or(defaults.default_currency),
        })
    }

    /// Saves only the fields the update carries.
    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        if let Some(theme) = update.theme.as_deref() {
            self.repository.update_setting(THEME_KEY, theme).await?;
        }
        if let Some(font_size) = update.font_size.as_deref() {
            self.repository
                .update_setting(FONT_SIZE_KEY, font_size)
                .await?;
        }
        if let Some(currency) = update.default_currency.as_deref() {
            self.set_default_currency(currency).await?;
        }
        Ok(())
    }

    /// Stored default currency, falling back to the global default.
    pub async fn get_default_currency(&self) -> Result<String> {
        Ok(self
            .repository
            .get_setting(DEFAULT_CURRENCY_KEY)
            .await?
            .unwrap_or_else(|| Settings::default().default_currency))
    }

    /// Only codes in the rate table can be the default; an unknown code
    /// would silently convert at rate 1 everywhere.
    pub async fn set_default_currency(&self, currency: &str) -> Result<()> {
        if !list_currencies().iter().any(|code| *code == currency) {
            return Err(Error::Validation(format!(
                "unknown currency code: {currency}"
            )));
        }
        log::debug!("Default currency changed to {}", currency);
        self.repository
            .update_setting(DEFAULT_CURRENCY_KEY, currency)
            .await
    }
}

/// In-memory repository for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySettingsRepository {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepositoryTrait for MemorySettingsRepository {
    async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
