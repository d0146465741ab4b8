use serde::{Deserialize, Serialize};

use crate::{ChatConfig, GateConfig};

/// Feature flags controlling which optional widgets are shown.
///
/// Loaded from `config.toml` when the app starts. Every field defaults to
/// `false` so that a missing or incomplete config file hides all optional
/// widgets.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Floating chat button on public pages.
    #[serde(default)]
    pub chat_launcher: bool,
    /// Self-service sign-up page and its navbar link.
    #[serde(default)]
    pub registration: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}
