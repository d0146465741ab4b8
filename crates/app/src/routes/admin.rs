use dioxus::prelude::*;
use shared_types::SPECIALTIES;
use shared_ui::{Card, CardDescription, CardHeader, CardTitle};

use crate::session::use_session;

/// Landing view for clinic administrators.
#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();
    let name = session
        .record()
        .map(|r| r.display_name().to_string())
        .unwrap_or_else(|| "there".to_string());
    let department_count = SPECIALTIES.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "dashboard",
            h1 { class: "dashboard-greeting", "Welcome back, {name}" }
            div { class: "dashboard-grid",
                Card {
                    CardHeader {
                        CardTitle { "Appointments" }
                        CardDescription { "Review today's bookings and resolve scheduling conflicts." }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Doctors" }
                        CardDescription { "Manage staff accounts across {department_count} departments." }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Patients" }
                        CardDescription { "Look up patient records and registration requests." }
                    }
                }
            }
        }
    }
}
