use dioxus::prelude::*;

pub mod badge;
pub mod button;
pub mod card;
pub mod chat_launcher;
pub mod field;
pub mod navbar;
pub mod section;
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use chat_launcher::*;
pub use field::*;
pub use navbar::*;
pub use section::*;
pub use sidebar::*;

/// Prepend a base class to caller-supplied attributes, merging class lists.
pub(crate) fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}
