use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` next to this crate's manifest, baked in at compile time.
const CONFIG_TOML: &str = include_str!("../config.toml");

/// Parse a config document. Missing sections and fields take their defaults.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::invalid_config(e.to_string()))
}

/// Parse the embedded config once and keep it for the process lifetime.
///
/// An unparseable file falls back to `AppConfig::default()`, which hides
/// all optional widgets.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match parse_config(CONFIG_TOML) {
        Ok(config) => {
            tracing::info!(features = ?config.features, "loaded config.toml");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "config.toml rejected, falling back to defaults");
            AppConfig::default()
        }
    })
}
