//! Settings module - persisted display preferences.

mod settings_model;
mod settings_service;

pub use settings_model::{Settings, SettingsUpdate};
pub use settings_service::{MemorySettingsRepository, SettingsRepositoryTrait, SettingsService};
