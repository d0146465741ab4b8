use serde::{Deserialize, Serialize};

use crate::DEFAULT_SESSION_KEY;

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}

fn default_admin_landing() -> String {
    "/admin".to_string()
}

fn default_doctor_landing() -> String {
    "/doctor".to_string()
}

fn default_chat_path() -> String {
    "/chat".to_string()
}

/// `[gate]` section: where the session lives and where privileged roles land.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateConfig {
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_admin_landing")]
    pub admin_landing: String,
    #[serde(default = "default_doctor_landing")]
    pub doctor_landing: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            admin_landing: default_admin_landing(),
            doctor_landing: default_doctor_landing(),
        }
    }
}

/// `[chat]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatConfig {
    /// Path on which the floating launcher is suppressed.
    #[serde(default = "default_chat_path")]
    pub hidden_path: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            hidden_path: default_chat_path(),
        }
    }
}

impl ChatConfig {
    /// Exact string comparison; `/chat/` and `/chat?x=1` still show it.
    pub fn launcher_visible(&self, current_path: &str) -> bool {
        current_path != self.hidden_path
    }
}
