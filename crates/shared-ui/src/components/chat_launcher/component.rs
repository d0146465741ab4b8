use dioxus::prelude::*;

use crate::components::with_class;

/// Floating round button pinned to the bottom-right corner that opens the
/// chat view.
///
/// Renders nothing while `hidden` is set; callers decide visibility from the
/// current route.
#[component]
pub fn ChatLauncher(
    #[props(default = false)] hidden: bool,
    #[props(default = "Chat with us".to_string())] label: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if hidden {
        return rsx! {};
    }

    let merged = with_class("chat-launcher", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            "aria-label": "{label}",
            title: "{label}",
            onclick: move |evt| onclick.call(evt),
            ..merged,
            {children}
        }
    }
}
