use dioxus::prelude::*;
use shared_types::{AppConfig, CLINIC_NAME};

use super::services::ServicesSection;
use super::specialties::SpecialtiesSection;
use crate::routes::Route;

/// Landing page: hero banner followed by the services and specialties sections.
#[component]
pub fn Home() -> Element {
    let config: AppConfig = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        section { class: "hero",
            div { class: "hero-copy",
                h1 { class: "hero-title", "Healthcare on your schedule" }
                p { class: "hero-subtitle",
                    "{CLINIC_NAME} connects you with trusted doctors for in-person and video visits. "
                    "Book an appointment in minutes."
                }
                div { class: "hero-actions",
                    if config.features.registration {
                        Link { to: Route::Register {}, class: "button hero-primary", "Book an appointment" }
                    }
                    Link { to: Route::Specialties {}, class: "button hero-secondary", "Find a specialist" }
                }
            }
        }

        ServicesSection {}
        SpecialtiesSection {}
    }
}
