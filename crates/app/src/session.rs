use dioxus::prelude::*;
use shared_types::{Decision, RoleClass, RoleGate, SessionRecord, SessionStore};
use std::rc::Rc;

/// `localStorage` in the browser. Other platforms have no shared store, so
/// every visitor reads as anonymous there.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for BrowserSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Read-only handle to the stored session, provided as context by `App`.
///
/// Every accessor re-reads the store; nothing is cached between renders.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
    key: String,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.store.get(&self.key)
    }

    /// The parsed record, or `None` when missing or unreadable.
    pub fn record(&self) -> Option<SessionRecord> {
        self.raw().and_then(|raw| SessionRecord::parse(&raw).ok())
    }

    pub fn role(&self) -> RoleClass {
        RoleClass::from_session(self.raw().as_deref())
    }

    pub fn evaluate(&self, gate: &RoleGate, requested_path: &str) -> Decision {
        gate.evaluate_store(self.store.as_ref(), &self.key, requested_path)
    }
}

/// Hook to access the session handle.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Which portal sidebar groups a role sees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SidebarVisibility {
    pub admin_console: bool,
    pub doctor_workspace: bool,
    /// Links back to the public pages. Hidden for staff, whom the role
    /// guard would bounce straight back to their landing view.
    pub public_site: bool,
}

impl SidebarVisibility {
    pub fn for_role(role: RoleClass) -> Self {
        match role {
            RoleClass::Admin => SidebarVisibility {
                admin_console: true,
                doctor_workspace: true,
                public_site: false,
            },
            RoleClass::Doctor => SidebarVisibility {
                admin_console: false,
                doctor_workspace: true,
                public_site: false,
            },
            RoleClass::Anonymous | RoleClass::Other => SidebarVisibility {
                admin_console: false,
                doctor_workspace: false,
                public_site: true,
            },
        }
    }
}
