use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path no route claims.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Page not found" }
            p { class: "not-found-message",
                "We couldn't find "
                code { "{path}" }
                "."
            }
            Link { to: Route::Home {}, class: "not-found-link", "Back to the clinic" }
        }
    }
}
