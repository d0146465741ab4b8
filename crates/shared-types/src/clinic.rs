//! Static marketing content for the public landing pages.

/// A bookable service shown in the services section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
}

/// A medical specialty the clinic staffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CLINIC_NAME: &str = "Meridian Clinic";

pub const SERVICES: &[Service] = &[
    Service {
        slug: "online-booking",
        title: "Online Booking",
        summary: "Pick a doctor and a time slot that suits you, any hour of the day.",
    },
    Service {
        slug: "video-consultations",
        title: "Video Consultations",
        summary: "See a clinician from home for follow-ups and minor concerns.",
    },
    Service {
        slug: "lab-results",
        title: "Lab Results",
        summary: "Receive test results and your doctor's notes in one place.",
    },
    Service {
        slug: "prescriptions",
        title: "Prescription Renewals",
        summary: "Request repeat prescriptions without another visit.",
    },
];

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        slug: "cardiology",
        name: "Cardiology",
        description: "Heart health checks, ECGs and long-term cardiac care.",
    },
    Specialty {
        slug: "dermatology",
        name: "Dermatology",
        description: "Skin, hair and nail conditions for all ages.",
    },
    Specialty {
        slug: "pediatrics",
        name: "Pediatrics",
        description: "Care for infants, children and teenagers.",
    },
    Specialty {
        slug: "neurology",
        name: "Neurology",
        description: "Headaches, sleep disorders and nervous system care.",
    },
    Specialty {
        slug: "orthopedics",
        name: "Orthopedics",
        description: "Bones, joints and sports injuries.",
    },
    Specialty {
        slug: "general-practice",
        name: "General Practice",
        description: "Everyday health concerns and preventive checkups.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let services: HashSet<_> = SERVICES.iter().map(|s| s.slug).collect();
        assert_eq!(services.len(), SERVICES.len());
        let specialties: HashSet<_> = SPECIALTIES.iter().map(|s| s.slug).collect();
        assert_eq!(specialties.len(), SPECIALTIES.len());
    }
}
