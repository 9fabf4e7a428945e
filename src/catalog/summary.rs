use tracing::info;

use crate::catalog::store::SourceCatalog;
use crate::core::types::pluralize;

/// Topic label the summary is logged under
pub const SUMMARY_TOPIC: &str = "Bacterial single-copy genes database";

/// Source names and gene counts, rendered as a single readable line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub sources: Vec<(String, usize)>,
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &SourceCatalog) -> Self {
        Self {
            sources: catalog
                .iter()
                .map(|s| (s.name.clone(), s.gene_count()))
                .collect(),
        }
    }

    /// Emit the summary as an informational log event
    pub fn log(&self) {
        info!(topic = SUMMARY_TOPIC, "{self}");
    }
}

impl std::fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loaded from {}", pluralize(self.sources.len(), "source"))?;
        if self.sources.is_empty() {
            return Ok(());
        }

        let parts: Vec<String> = self
            .sources
            .iter()
            .map(|(name, count)| format!("{name} ({})", pluralize(*count, "gene")))
            .collect();
        write!(f, "; {}", parts.join(", "))
    }
}
