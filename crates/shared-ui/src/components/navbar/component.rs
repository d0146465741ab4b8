use dioxus::prelude::*;

use crate::components::with_class;

/// Top bar of the public site. Children are laid out left to right.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("site-navbar", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            nav { class: "site-navbar-inner", {children} }
        }
    }
}

/// Brand block on the left of the navbar.
#[component]
pub fn NavbarBrand(title: String, #[props(default)] tagline: Option<String>) -> Element {
    rsx! {
        div { class: "site-navbar-brand",
            span { class: "site-navbar-title", "{title}" }
            if let Some(tagline) = tagline {
                span { class: "site-navbar-tagline", "{tagline}" }
            }
        }
    }
}

/// Right-aligned group of navigation links.
#[component]
pub fn NavbarLinks(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("site-navbar-links", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
