use serde_json::json;
use shared_types::{Decision, RoleGate};

/// Serialize a session record whose role label sits under `field`.
pub fn session_with_role(field: &str, label: &str) -> String {
    json!({
        "id": 101,
        "email": "someone@clinic.test",
        "role": { field: label },
    })
    .to_string()
}

/// Evaluate with the default landings against a public path.
pub fn evaluate(raw: Option<&str>) -> Decision {
    RoleGate::default().evaluate(raw, "/login")
}

pub fn redirect(target: &str) -> Decision {
    Decision::Redirect(target.to_string())
}
