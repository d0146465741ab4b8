use dioxus::prelude::*;
use std::rc::Rc;

mod config;
mod routes;
mod session;
use routes::Route;
use session::{BrowserSessionStore, SessionContext};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let app_config = config::load_config();

    use_context_provider(|| app_config.clone());

    // The store is injected so routes never touch localStorage directly.
    use_context_provider(|| {
        SessionContext::new(Rc::new(BrowserSessionStore), app_config.gate.session_key.clone())
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
