use crate::{GateConfig, SessionRecord, SessionStore};

/// Coarse classification of whoever is at the keyboard.
///
/// Derived fresh on every navigation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleClass {
    /// No readable session.
    #[default]
    Anonymous,
    Admin,
    Doctor,
    /// Signed in with any other label, including an empty one.
    Other,
}

impl RoleClass {
    /// Classify a role label by case-insensitive substring match.
    /// `admin` is checked before `doctor`.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("admin") {
            RoleClass::Admin
        } else if label.contains("doctor") {
            RoleClass::Doctor
        } else {
            RoleClass::Other
        }
    }

    /// Classify a raw stored value. Unreadable values count as anonymous.
    pub fn from_session(raw: Option<&str>) -> Self {
        raw.and_then(|r| SessionRecord::parse(r).ok())
            .map(|record| Self::from_label(record.role_label()))
            .unwrap_or(RoleClass::Anonymous)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleClass::Anonymous => "anonymous",
            RoleClass::Admin => "admin",
            RoleClass::Doctor => "doctor",
            RoleClass::Other => "other",
        }
    }
}

/// Outcome of evaluating a navigation against the stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested view.
    Allow,
    /// Replace the current history entry with this path.
    Redirect(String),
}

/// Sends signed-in admins and doctors to their own landing views when
/// they open a public page.
///
/// Fails open: a missing or unreadable session always allows.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleGate {
    admin_landing: String,
    doctor_landing: String,
}

impl Default for RoleGate {
    fn default() -> Self {
        Self::new(&GateConfig::default())
    }
}

impl RoleGate {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            admin_landing: config.admin_landing.clone(),
            doctor_landing: config.doctor_landing.clone(),
        }
    }

    /// Decide what to do with a navigation given the raw stored session.
    ///
    /// The requested path does not affect the outcome.
    pub fn evaluate(&self, session_raw: Option<&str>, _requested_path: &str) -> Decision {
        match RoleClass::from_session(session_raw) {
            RoleClass::Admin => Decision::Redirect(self.admin_landing.clone()),
            RoleClass::Doctor => Decision::Redirect(self.doctor_landing.clone()),
            RoleClass::Anonymous | RoleClass::Other => Decision::Allow,
        }
    }

    /// [`evaluate`](Self::evaluate) with the session read from `store`.
    pub fn evaluate_store(
        &self,
        store: &dyn SessionStore,
        key: &str,
        requested_path: &str,
    ) -> Decision {
        let raw = store.get(key);
        self.evaluate(raw.as_deref(), requested_path)
    }
}
