use serde::Deserialize;

use crate::catalog::CatalogItem;

/// A shipped project. Deserialized from the optional portfolio feed and also
/// provided as built-in fallback data.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl CatalogItem for PortfolioItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Projects"),
    ("biology", "Biology"),
    ("chemistry", "Chemistry"),
    ("physics", "Physics"),
];

/// Rendered whenever the portfolio feed cannot be fetched or decoded.
pub fn fallback_projects() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            id: "1".into(),
            title: "GenomeViz Pro".into(),
            category: "biology".into(),
            description: "Interactive genome browser for Stanford's genomics research team with real-time data visualization and collaborative annotation tools.".into(),
            image: "/images/project-genomeviz.png".into(),
            technologies: vec!["React".into(), "D3.js".into(), "WebGL".into(), "Node.js".into(), "MongoDB".into()],
            live_url: "https://genomeviz-demo.sagittarius.ai".into(),
            github_url: Some("https://github.com/sagittarius/genomeviz".into()),
            featured: true,
        },
        PortfolioItem {
            id: "2".into(),
            title: "ChemLab Analytics".into(),
            category: "chemistry".into(),
            description: "Comprehensive chemical analysis platform for MIT's chemistry department with molecular modeling and reaction pathway visualization.".into(),
            image: "/images/project-chemlab.png".into(),
            technologies: vec!["Vue.js".into(), "Three.js".into(), "RDKit".into(), "Python".into(), "PostgreSQL".into()],
            live_url: "https://chemlab-demo.sagittarius.ai".into(),
            github_url: None,
            featured: true,
        },
        PortfolioItem {
            id: "3".into(),
            title: "Quantum Simulator Hub".into(),
            category: "physics".into(),
            description: "Advanced quantum physics simulation platform for CERN with real-time particle interaction modeling and collaborative research tools.".into(),
            image: "/images/project-quantum.png".into(),
            technologies: vec!["Next.js".into(), "WebAssembly".into(), "TensorFlow.js".into(), "WebGL".into(), "Redis".into()],
            live_url: "https://quantum-demo.sagittarius.ai".into(),
            github_url: Some("https://github.com/sagittarius/quantum-sim".into()),
            featured: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_projects_covering_every_discipline() {
        let projects = fallback_projects();
        assert_eq!(projects.len(), 3);
        for (id, _) in CATEGORIES.iter().skip(1) {
            assert!(projects.iter().any(|p| p.category == *id));
        }
    }
}
