use dioxus::prelude::*;

/// A titled band of the landing page with a responsive card grid body.
#[component]
pub fn PageSection(
    id: String,
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { class: "page-section", id: "{id}",
            div { class: "page-section-header",
                h2 { class: "page-section-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-section-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-section-grid", {children} }
        }
    }
}
