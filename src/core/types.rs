use serde::{Deserialize, Serialize};

/// One row of a gene list: a Pfam accession and the gene it identifies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub pfam_id: String,
    pub gene: String,
}

impl GeneRecord {
    pub fn new(pfam_id: impl Into<String>, gene: impl Into<String>) -> Self {
        Self {
            pfam_id: pfam_id.into(),
            gene: gene.into(),
        }
    }
}

/// Header fields of a single profile in an HMM file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmmProfile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
}

impl std::fmt::Display for HmmProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.accession {
            Some(acc) => write!(f, "{} ({acc})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Pluralize a noun for a count ("1 gene", "0 genes", "2 genes")
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
