use dioxus::prelude::*;
use shared_ui::{Card, CardDescription, CardHeader, CardTitle};

use crate::routes::Route;
use crate::session::use_session;

/// Landing view for doctors.
#[component]
pub fn DoctorDashboard() -> Element {
    let session = use_session();
    let name = session
        .record()
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| "Doctor".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "dashboard",
            h1 { class: "dashboard-greeting", "Good to see you, {name}" }
            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Today's schedule" }
                        CardDescription { "Your upcoming consultations, in order." }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Patient messages" }
                        CardDescription {
                            "Unanswered questions from the "
                            Link { to: Route::Chat {}, "chat inbox" }
                            "."
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Lab results" }
                        CardDescription { "Results waiting for your review." }
                    }
                }
            }
        }
    }
}
