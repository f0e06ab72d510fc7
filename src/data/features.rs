use crate::catalog::{Catalog, CatalogItem};

#[derive(Clone, PartialEq, Debug)]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub short: &'static str,
    pub long: &'static str,
}

impl CatalogItem for Feature {
    fn id(&self) -> &str {
        self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.short, self.long)
    }
}

pub fn features() -> Catalog<Feature> {
    Catalog::new(vec![
        Feature {
            id: "built-for-researchers",
            title: "Built for Researchers",
            short: "We understand the unique challenges of scientific data presentation and designed every workflow for researchers.",
            long: "Our team spent years working with leading research institutions. We prioritize reproducibility, provenance, and clear visual narratives so your work is ready for collaboration and publication.",
        },
        Feature {
            id: "complete-platform",
            title: "Complete Platform",
            short: "Data visualization, collaboration and publication tools in one platform — built for research teams.",
            long: "From interactive dashboards to data portals and publication-ready outputs, your team controls the entire web ecosystem for research. Integrations, versioning, and fine-grained access controls are built in so you can focus on science.",
        },
        Feature {
            id: "no-it-department",
            title: "No IT Department Required",
            short: "No PhD in infrastructure required — researchers can get started quickly without specialized IT support.",
            long: "Hosting, backups, security updates and monitoring are part of every engagement. Your lab keeps ownership of data and content without having to operate servers.",
        },
        Feature {
            id: "research-first-outcomes",
            title: "Research-first Outcomes",
            short: "Built to help researchers measure and demonstrate impact.",
            long: "Every feature is designed to increase reproducibility, lower friction for collaborators, and make your research outputs easier to share with peers, funders, and the public.",
        },
    ])
}
