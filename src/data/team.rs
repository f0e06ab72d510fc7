#[derive(Clone, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

pub fn members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "anbu",
            name: "Anbu Malligarjun sri",
            role: "Founder & CEO",
            bio: "Leads company vision, partnerships, growth strategy, and product direction across all domains in STEM.",
            image: "/images/anbu.png",
        },
        TeamMember {
            id: "arun",
            name: "Arun G",
            role: "Co-Founder & CTO",
            bio: "Expert in full-stack development. Oversees all technology decisions, architecture, and product execution.",
            image: "/images/arun.png",
        },
        TeamMember {
            id: "brajin",
            name: "Brajin SJ",
            role: "Co-Founder & COO",
            bio: "Responsible for operational efficiency, architecture integration, and smooth workflow across scientific and technical projects.",
            image: "/images/brajin.png",
        },
    ]
}
