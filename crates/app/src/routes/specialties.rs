use dioxus::prelude::*;
use shared_types::SPECIALTIES;
use shared_ui::{Card, CardDescription, CardHeader, CardTitle, PageSection};

/// Grid of specialties the clinic staffs.
#[component]
pub fn SpecialtiesSection() -> Element {
    rsx! {
        PageSection {
            id: "specialties",
            title: "Specialties",
            subtitle: "Experienced doctors across the areas patients ask for most.",
            for specialty in SPECIALTIES.iter() {
                Card { key: "{specialty.slug}", class: "specialty-card",
                    CardHeader {
                        CardTitle { "{specialty.name}" }
                        CardDescription { "{specialty.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Specialties() -> Element {
    rsx! {
        SpecialtiesSection {}
    }
}
