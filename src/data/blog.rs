use crate::catalog::{Catalog, CatalogItem};

#[derive(Clone, PartialEq, Debug)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub featured: bool,
}

impl CatalogItem for BlogPost {
    fn id(&self) -> &str {
        self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.excerpt)
    }

    fn category(&self) -> Option<&str> {
        Some(self.category)
    }
}

pub const CATEGORIES: &[&str] = &[
    "All",
    "Research Platforms",
    "Data Visualization",
    "AI Integration",
    "Reproducibility",
    "Research",
];

pub fn posts() -> Catalog<BlogPost> {
    Catalog::new(vec![
        BlogPost {
            id: "1",
            title: "Designing Genome Browsers Researchers Actually Use",
            excerpt: "Interactive genome browsers live or die on navigation speed and annotation workflows. What we learned shipping three of them.",
            content: "Genome browsers sit at the center of most genomics portals we build. The difference between a tool researchers adopt and one they abandon comes down to three things: pan/zoom latency, annotation ergonomics, and shareable views. This post walks through the rendering pipeline and caching strategy behind our latest build.",
            author: "Sagittarius Engineering",
            date: "2025-09-23",
            read_time: "5 min read",
            category: "Data Visualization",
            tags: &["Genomics", "Visualization"],
            image: "/images/blog-genome.jpg",
            featured: true,
        },
        BlogPost {
            id: "2",
            title: "How Model-Backed Annotation Changes Lab Workflows",
            excerpt: "Putting lightweight inference behind annotation tools cuts manual effort dramatically without hiding decisions from the researcher.",
            content: "Automated annotation is only useful when researchers can see, audit and override what a model suggested. We cover the review-queue pattern we now use on every AI-assisted platform.",
            author: "Analytics Team",
            date: "2025-08-19",
            read_time: "5 min read",
            category: "AI Integration",
            tags: &["Annotation", "Automation"],
            image: "/images/blog-annotation.jpg",
            featured: false,
        },
        BlogPost {
            id: "3",
            title: "Reproducible Pipelines for Collaborative Notebooks",
            excerpt: "Versioned experiments and pinned environments make notebook results defensible in review and reusable across labs.",
            content: "Reproducibility is a platform feature, not a habit. We describe the experiment-versioning model we ship with collaborative notebooks and why provenance has to be captured at write time.",
            author: "Sagittarius Engineering",
            date: "2025-08-12",
            read_time: "6 min read",
            category: "Reproducibility",
            tags: &["Pipelines", "Provenance"],
            image: "/images/blog-pipelines.jpg",
            featured: false,
        },
        BlogPost {
            id: "4",
            title: "Choosing Storage for Instrument Telemetry",
            excerpt: "Time-series telemetry from lab instruments has a shape general-purpose databases handle badly. A field guide.",
            content: "From TimescaleDB to plain Parquet on object storage, the right answer depends on query patterns and retention. We compare the setups we have deployed for physics labs.",
            author: "Platform Team",
            date: "2025-07-30",
            read_time: "7 min read",
            category: "Research Platforms",
            tags: &["Telemetry", "Storage"],
            image: "/images/blog-telemetry.jpg",
            featured: false,
        },
        BlogPost {
            id: "5",
            title: "Spectral Data Viewers: Annotation Without the Pain",
            excerpt: "NMR and MS spectra need domain-aware viewers. Auto-annotation gets chemists to the interesting peaks faster.",
            content: "A spectral viewer is a deceptively deep component. We outline the zoom model, the peak-picking integration and how predicted annotations are surfaced without overwhelming the plot.",
            author: "Sagittarius Engineering",
            date: "2025-07-08",
            read_time: "4 min read",
            category: "Data Visualization",
            tags: &["Chemistry", "Spectra"],
            image: "/images/blog-spectra.jpg",
            featured: false,
        },
        BlogPost {
            id: "6",
            title: "What Research Institutions Ask About AI Features",
            excerpt: "Compliance, provenance and cost come up in every scoping call. Here is how we answer them.",
            content: "Before any model touches research data, institutions want to know where data flows, what gets logged, and what it costs to run. This post collects the questions we hear most and our standard answers.",
            author: "Sagittarius Team",
            date: "2025-06-17",
            read_time: "5 min read",
            category: "Research",
            tags: &["AI", "Compliance"],
            image: "/images/blog-questions.jpg",
            featured: false,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_resolve_by_id_and_exactly_one_is_featured() {
        let catalog = posts();
        assert!(catalog.get("3").is_some());
        assert_eq!(catalog.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn every_post_category_is_listed() {
        for post in posts().iter() {
            assert!(CATEGORIES.contains(&post.category), "unlisted category {}", post.category);
        }
    }
}
