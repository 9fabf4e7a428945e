use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use crate::catalog::builder::{LoaderConfig, SourceLoader};
use crate::catalog::summary::CatalogSummary;
use crate::core::source::{SourceEntry, REQUIRED_FILES};
use crate::parsing::tsv::ParseError;
use crate::utils::validation::ALLOWED_SOURCE_NAME_CHARS;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read source directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Source directory '{name}' contains characters that are not allowed ({found}). \
         Source names are also used as identifiers, so they must be composed of \
         {} alone",
        ALLOWED_SOURCE_NAME_CHARS
    )]
    InvalidSourceName { name: String, found: String },

    #[error(
        "Source '{name}' is missing {}. Each single-copy gene source must contain {}",
        .missing.join(", "),
        REQUIRED_FILES.join(", ")
    )]
    IncompleteSource {
        name: String,
        missing: Vec<&'static str>,
    },

    #[error("Gene list of source '{name}' ({}) is malformed: {source}", .path.display())]
    MalformedGeneList {
        name: String,
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{} sources failed validation:\n{}", .0.len(), format_errors(.0))]
    Multiple(Vec<CatalogError>),

    #[error("A source catalog has already been installed")]
    AlreadyInstalled,

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn format_errors(errors: &[CatalogError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Catalog export version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub base_dir: PathBuf,
    pub sources: Vec<SourceEntry>,
}

/// All single-copy gene sources found under a base directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCatalog {
    /// Directory the sources were discovered in
    pub base_dir: PathBuf,

    /// Source name -> entry
    sources: BTreeMap<String, SourceEntry>,
}

static INSTALLED: OnceLock<SourceCatalog> = OnceLock::new();

/// Install a catalog as the process-wide catalog.
///
/// This can succeed only once per process. Code that can take the catalog as
/// an argument should do so instead.
///
/// # Errors
///
/// Returns `CatalogError::AlreadyInstalled` if a catalog was installed before.
pub fn install(catalog: SourceCatalog) -> Result<&'static SourceCatalog, CatalogError> {
    INSTALLED
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInstalled)?;
    INSTALLED.get().ok_or(CatalogError::AlreadyInstalled)
}

/// The process-wide catalog, if one has been installed
pub fn installed() -> Option<&'static SourceCatalog> {
    INSTALLED.get()
}

impl SourceCatalog {
    /// Create an empty catalog for `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            sources: BTreeMap::new(),
        }
    }

    /// Discover and validate every source under `base_dir`, stopping at the
    /// first invalid one
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` encountered.
    pub fn load(base_dir: &Path) -> Result<Self, CatalogError> {
        Self::load_with_config(base_dir, &LoaderConfig::default())
    }

    /// Discover and validate every source under `base_dir`
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if any source is invalid. With
    /// `collect_all_errors` set, every failure is reported together.
    pub fn load_with_config(base_dir: &Path, config: &LoaderConfig) -> Result<Self, CatalogError> {
        SourceLoader::new(config.clone()).load(base_dir)
    }

    /// Add a source, replacing any source with the same name
    pub fn add_source(&mut self, entry: SourceEntry) {
        self.sources.insert(entry.name.clone(), entry);
    }

    /// Get a source by name
    pub fn get(&self, name: &str) -> Option<&SourceEntry> {
        self.sources.get(name)
    }

    /// Iterate over sources in name order
    pub fn iter(&self) -> impl Iterator<Item = &SourceEntry> {
        self.sources.values()
    }

    /// Source names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Total number of genes across all sources
    pub fn total_genes(&self) -> usize {
        self.sources.values().map(SourceEntry::gene_count).sum()
    }

    /// One-line description of the catalog contents
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from_catalog(self)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialize` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            base_dir: self.base_dir.clone(),
            sources: self.sources.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of sources in catalog
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tsv::parse_gene_list_text;

    fn entry(name: &str, genes: &[&str]) -> SourceEntry {
        let mut text = String::from("pfam_id\tgene\n");
        for (i, gene) in genes.iter().enumerate() {
            text.push_str(&format!("PF{:05}\t{gene}\n", i + 1));
        }
        let list = parse_gene_list_text(&text).unwrap();
        SourceEntry::new(name, &Path::new("/sources").join(name), list)
    }

    #[test]
    fn test_add_and_get_source() {
        let mut catalog = SourceCatalog::new("/sources");
        assert!(catalog.is_empty());

        catalog.add_source(entry("Ecoli_markers", &["geneA", "geneB"]));
        catalog.add_source(entry("Bacteria97", &["rpoB"]));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.total_genes(), 3);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["Bacteria97", "Ecoli_markers"]
        );
        assert_eq!(catalog.get("Bacteria97").unwrap().gene_count(), 1);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_catalog_to_json() {
        let mut catalog = SourceCatalog::new("/sources");
        catalog.add_source(entry("Ecoli_markers", &["geneA"]));
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"sources\""));
        assert!(json.contains("Ecoli_markers"));

        let data: CatalogData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.version, CATALOG_VERSION);
        assert_eq!(data.sources.len(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::IncompleteSource {
            name: "Bacteria97".to_string(),
            missing: vec!["genes.hmm.gz"],
        };
        let msg = err.to_string();
        assert!(msg.contains("Bacteria97"));
        assert!(msg.contains("missing genes.hmm.gz"));
        assert!(msg.contains("reference.txt, genes.txt, genes.hmm.gz"));

        let err = CatalogError::InvalidSourceName {
            name: "bad-name".to_string(),
            found: "'-'".to_string(),
        };
        assert!(err.to_string().contains(ALLOWED_SOURCE_NAME_CHARS));

        let err = CatalogError::Multiple(vec![
            CatalogError::AlreadyInstalled,
            CatalogError::AlreadyInstalled,
        ]);
        assert!(err.to_string().starts_with("2 sources failed validation"));
    }

    #[test]
    fn test_install_once() {
        let catalog = SourceCatalog::new("/sources");
        let installed_ref = install(catalog.clone()).unwrap();
        assert_eq!(installed_ref, &catalog);
        assert_eq!(installed(), Some(&catalog));

        let second = install(SourceCatalog::new("/other"));
        assert!(matches!(second, Err(CatalogError::AlreadyInstalled)));
        assert_eq!(installed().unwrap().base_dir, PathBuf::from("/sources"));
    }
}
