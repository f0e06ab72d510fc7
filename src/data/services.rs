use crate::catalog::{Catalog, CatalogItem};

#[derive(Clone, PartialEq, Debug)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub short: &'static str,
    pub long: &'static str,
    pub ai_integrations: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub data_types: &'static [&'static str],
    pub compliance: &'static [&'static str],
    pub features: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub price: &'static str,
    pub timeline: &'static str,
    pub example_image: Option<&'static str>,
}

impl CatalogItem for Service {
    fn id(&self) -> &str {
        self.id
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.short, self.long)
    }
}

pub fn services() -> Catalog<Service> {
    Catalog::new(vec![
        Service {
            id: "biology",
            title: "Biology AI Websites",
            short: "Interactive genome browsers, protein visualizers, collaborative notebooks and reproducible pipelines.",
            long: "We build intelligent biology platforms that combine large-scale data visualization with model-backed interpretation, enabling researchers to explore genomes, annotate experiments, and run lightweight ML inference in-browser or on cloud endpoints.",
            ai_integrations: &[
                "Sequence annotation with fine-tuned transformers",
                "Image analysis for microscopy (cell segmentation)",
                "Assisted literature summarization for experiments",
            ],
            use_cases: &[
                "Genomics portals and variant explorers",
                "Microscopy image processing & annotation",
                "Collaborative lab notebooks with reproducible pipelines",
            ],
            data_types: &["FASTQ / BAM", "Microscopy images (TIFF)", "Tabular assays (CSV, TSV)"],
            compliance: &["HIPAA-ready integrations", "Role-based access", "Audit logging"],
            features: &[
                "Interactive genome browser (zoom/pan/annotations)",
                "Protein structure viewer (WebGL)",
                "Experiment versioning & reproducible pipelines",
                "Notebook-style experiment reports",
            ],
            technologies: &["Next.js", "D3.js", "WebGL/Three.js", "Python APIs", "Postgres / MinIO"],
            price: "From $18,000",
            timeline: "8-10 weeks",
            example_image: Some("/images/biology-sample.jpg"),
        },
        Service {
            id: "chemistry",
            title: "Chemistry AI Websites",
            short: "Molecular editors, reaction search, spectral analysis, and model-backed property prediction.",
            long: "Chemistry platforms we build allow chemists to draw, simulate and query molecules, connect with computational engines, and apply ML models for property prediction or reaction outcome scoring.",
            ai_integrations: &[
                "Molecular property prediction (ML models)",
                "Reaction outcome scoring & retrosynthesis hints",
                "OCR for instrument outputs & spectral interpretation",
            ],
            use_cases: &[
                "Reaction registry + search with similarity",
                "Spectral data indexing and automatic annotation",
                "Laboratory data connectivity (LIMS integrations)",
            ],
            data_types: &["MOL/SDF", "Spectra (NMR, MS)", "Reaction SMILES"],
            compliance: &["Access control for IP", "Export controls", "Audit trails"],
            features: &[
                "2D/3D molecular editor & viewer",
                "Reaction search and similarity ranking",
                "Spectral data viewer with auto-annotations",
            ],
            technologies: &["React", "RDKit/Wasmtime", "Three.js", "Redis", "Postgres"],
            price: "From $20,000",
            timeline: "8-12 weeks",
            example_image: Some("/images/chemistry-sample.jpg"),
        },
        Service {
            id: "physics",
            title: "Physics AI Websites",
            short: "Simulation dashboards, interactive visualizations, and real-time data analysis for experiments.",
            long: "Physics platforms focus on interactive simulations, real-time telemetry dashboards, and analysis tools that let researchers prototype experiments, visualize outcomes and integrate ML-driven analysis.",
            ai_integrations: &[
                "Surrogate simulation models for fast exploration",
                "Anomaly detection on instrument telemetry",
                "Auto-summarization of experiment results",
            ],
            use_cases: &[
                "Real-time experiment dashboards",
                "Parameter sweeps with surrogate models",
                "Collaborative result annotation",
            ],
            data_types: &["Time-series telemetry", "Simulation outputs", "Large arrays / HDF5"],
            compliance: &["Data provenance", "Access controls", "Export-safe deployments"],
            features: &[
                "Interactive parameterized simulators",
                "Telemetry ingestion + anomaly detection",
                "Visualization playgrounds (3D/volume rendering)",
            ],
            technologies: &["Vue/React", "WebAssembly", "TensorFlow.js", "Redis", "TimescaleDB"],
            price: "From $22,000",
            timeline: "10-14 weeks",
            example_image: Some("/images/physics-sample.jpg"),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_resolves_by_its_own_id() {
        let catalog = services();
        for service in catalog.iter() {
            assert_eq!(catalog.get(service.id).unwrap(), service);
        }
    }

    #[test]
    fn service_ids_are_url_safe() {
        for service in services().iter() {
            assert!(!service.id.contains('/'));
            assert!(!service.id.is_empty());
        }
    }
}
