use dioxus::prelude::*;
use shared_types::SERVICES;
use shared_ui::{Card, CardDescription, CardHeader, CardTitle, PageSection};

/// Grid of bookable services. Shared by the landing page and `/services`.
#[component]
pub fn ServicesSection() -> Element {
    rsx! {
        PageSection {
            id: "services",
            title: "Our Services",
            subtitle: "Everything you need to look after your health, in one place.",
            for service in SERVICES.iter() {
                Card { key: "{service.slug}", class: "service-card",
                    CardHeader {
                        CardTitle { "{service.title}" }
                        CardDescription { "{service.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        ServicesSection {}
    }
}
