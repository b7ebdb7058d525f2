use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::spring::{
    default_damping, default_mass, default_rest_displacement, default_rest_speed,
    default_stiffness, SpringParams,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: BackendSettings,
    #[serde(default)]
    pub deck: DeckSettings,
    #[serde(default)]
    pub spring: SpringSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    pub profiles_collection: String,
    pub photo_bucket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeckSettings {
    /// Logical width of the card viewport; the commit threshold is a quarter
    /// of this.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
    /// How many profiles to generate when falling back to mock data.
    #[serde(default = "default_mock_profile_count")]
    pub mock_profile_count: usize,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            fetch_limit: default_fetch_limit(),
            mock_profile_count: default_mock_profile_count(),
        }
    }
}

fn default_viewport_width() -> f64 { 400.0 }
fn default_fetch_limit() -> usize { 50 }
fn default_mock_profile_count() -> usize { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct SpringSettings {
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_rest_displacement")]
    pub rest_displacement: f64,
    #[serde(default = "default_rest_speed")]
    pub rest_speed: f64,
}

impl Default for SpringSettings {
    fn default() -> Self {
        Self {
            stiffness: default_stiffness(),
            damping: default_damping(),
            mass: default_mass(),
            rest_displacement: default_rest_displacement(),
            rest_speed: default_rest_speed(),
        }
    }
}

impl SpringSettings {
    pub fn params(&self) -> SpringParams {
        SpringParams {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
            rest_displacement: self.rest_displacement,
            rest_speed: self.rest_speed,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Path of the local state file (onboarding flag, saved matches).
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
        }
    }
}

fn default_state_path() -> String {
    ".lume/state.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with LUME_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with LUME)
            // e.g., LUME__BACKEND__API_KEY -> backend.api_key
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply unprefixed credential variables commonly set in deploy envs
        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("LUME")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Fold unprefixed APPWRITE_* variables into the backend section, so the
/// client picks up the same credentials the deployment scripts export.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let endpoint = env::var("APPWRITE_ENDPOINT").ok();
    let api_key = env::var("APPWRITE_API_KEY").ok();
    let project_id = env::var("APPWRITE_PROJECT_ID").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(endpoint) = endpoint {
        builder = builder.set_override("backend.endpoint", endpoint)?;
    }
    if let Some(api_key) = api_key {
        builder = builder.set_override("backend.api_key", api_key)?;
    }
    if let Some(project_id) = project_id {
        builder = builder.set_override("backend.project_id", project_id)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_settings() {
        let deck = DeckSettings::default();
        assert_eq!(deck.viewport_width, 400.0);
        assert_eq!(deck.fetch_limit, 50);
        assert_eq!(deck.mock_profile_count, 100);
    }

    #[test]
    fn test_default_spring_settings_match_params() {
        let params = SpringSettings::default().params();
        assert_eq!(params, SpringParams::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
    }
}
