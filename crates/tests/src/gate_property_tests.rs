use proptest::prelude::*;
use shared_types::{Decision, RoleClass, SessionRecord};

use crate::common::*;

fn role_field() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("name"), Just("roleName")]
}

/// Labels built from lowercase letters and dashes that avoid both keywords.
fn plain_label() -> impl Strategy<Value = String> {
    "[a-z -]{0,24}".prop_filter("must not mention a privileged role", |s| {
        !s.contains("admin") && !s.contains("doctor")
    })
}

/// Randomly upper-case characters of `s`.
fn scramble_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics_and_is_stable(raw in ".*") {
        let first = evaluate(Some(&raw));
        let second = evaluate(Some(&raw));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unparsable_input_allows(raw in ".*") {
        prop_assume!(SessionRecord::parse(&raw).is_err());
        prop_assert_eq!(evaluate(Some(&raw)), Decision::Allow);
    }

    #[test]
    fn admin_anywhere_redirects_to_admin(
        field in role_field(),
        prefix in plain_label(),
        suffix in "[a-z -]{0,24}",
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let label = scramble_case(&format!("{prefix}admin{suffix}"), &mask);
        let raw = session_with_role(field, &label);
        prop_assert_eq!(evaluate(Some(&raw)), redirect("/admin"));
    }

    #[test]
    fn doctor_without_admin_redirects_to_doctor(
        field in role_field(),
        prefix in plain_label(),
        suffix in plain_label(),
        mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let label = format!("{prefix}doctor{suffix}");
        prop_assume!(!label.contains("admin"));
        let label = scramble_case(&label, &mask);
        let raw = session_with_role(field, &label);
        prop_assert_eq!(evaluate(Some(&raw)), redirect("/doctor"));
    }

    #[test]
    fn other_labels_allow(field in role_field(), label in plain_label()) {
        let raw = session_with_role(field, &label);
        prop_assert_eq!(evaluate(Some(&raw)), Decision::Allow);
    }

    #[test]
    fn classification_matches_decision(field in role_field(), label in "[a-zA-Z -]{0,32}") {
        let raw = session_with_role(field, &label);
        let expected = match RoleClass::from_label(&label) {
            RoleClass::Admin => redirect("/admin"),
            RoleClass::Doctor => redirect("/doctor"),
            RoleClass::Anonymous | RoleClass::Other => Decision::Allow,
        };
        prop_assert_eq!(evaluate(Some(&raw)), expected);
    }
}
