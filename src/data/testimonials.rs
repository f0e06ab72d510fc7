#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The genome browser they built became the front door to our entire dataset. Collaborators cite it in papers now.",
            name: "Dr. Sarah Chen",
            role: "Principal Investigator",
            organization: "Stanford University",
        },
        Testimonial {
            quote: "They understood reaction data better than vendors we had worked with for years. The platform shipped on schedule.",
            name: "Prof. Michael Rodriguez",
            role: "Department Chair",
            organization: "MIT",
        },
        Testimonial {
            quote: "Telemetry dashboards that used to take our postdocs a week to assemble are now live views anyone in the group can share.",
            name: "Dr. Elena Novak",
            role: "Research Lead",
            organization: "CERN",
        },
    ]
}
