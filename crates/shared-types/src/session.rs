use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::AppError;

/// Storage key the login flow writes the signed-in user under.
pub const DEFAULT_SESSION_KEY: &str = "user";

/// A `role.name` value as stored.
///
/// Anything that is not a string is kept as `Opaque`: it still takes
/// precedence over `roleName` but never names a privileged role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoleLabel {
    Text(String),
    Opaque(serde_json::Value),
}

/// Role descriptor embedded in a session record.
///
/// Login flows have written the label under either `name` or `roleName`
/// over time. A non-string `roleName` is dropped during parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoleDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<RoleLabel>,
    #[serde(
        default,
        rename = "roleName",
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub role_name: Option<String>,
}

impl RoleDescriptor {
    /// The role label used for classification.
    ///
    /// A non-empty string `name` wins. A missing, `null` or empty `name`
    /// falls back to `roleName`. Any other `name` yields `""`, which
    /// matches no role.
    pub fn label(&self) -> &str {
        match &self.name {
            Some(RoleLabel::Text(name)) if !name.is_empty() => name.as_str(),
            Some(RoleLabel::Opaque(_)) => "",
            _ => self.role_name.as_deref().unwrap_or(""),
        }
    }
}

/// The signed-in user as stored by the external login flow.
///
/// Only `role` drives navigation; the remaining fields are display data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "object_or_none")]
    pub role: Option<RoleDescriptor>,
}

impl SessionRecord {
    /// Parse a raw stored value.
    ///
    /// Anything other than a JSON object is a `MalformedSession` error.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| AppError::malformed_session(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::malformed_session("session record is not an object"));
        }
        serde_json::from_value(value).map_err(|e| AppError::malformed_session(e.to_string()))
    }

    /// Role label per [`RoleDescriptor::label`], or `""` without a role.
    pub fn role_label(&self) -> &str {
        self.role.as_ref().map(RoleDescriptor::label).unwrap_or("")
    }

    /// Name to show in navigation chrome.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Guest")
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn object_or_none<'de, D>(deserializer: D) -> Result<Option<RoleDescriptor>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

/// Read-only view of the host's key-value store.
///
/// The browser build reads `localStorage`; tests and non-browser
/// platforms use [`MemorySessionStore`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store seeded up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding, used by tests and previews.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
