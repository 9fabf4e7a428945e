use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::core::types::HmmProfile;
use crate::parsing::hmm::read_profiles;
use crate::parsing::tsv::{GeneList, ParseError};

/// Name of the references description file inside a source directory.
///
/// The same name is used for the existence check and for the stored
/// `reference` path. Older loaders checked `reference.txt` but recorded
/// `references.txt`; only the checked name is guaranteed to exist.
pub const REFERENCE_FILE: &str = "reference.txt";

/// Name of the tab-delimited gene list inside a source directory
pub const GENES_FILE: &str = "genes.txt";

/// Name of the gzip-compressed HMM profile file inside a source directory
pub const HMM_FILE: &str = "genes.hmm.gz";

/// Files every source directory must contain
pub const REQUIRED_FILES: [&str; 3] = [REFERENCE_FILE, GENES_FILE, HMM_FILE];

/// A single-copy gene source discovered on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Source name (the directory basename)
    pub name: String,

    /// Path to the references description file
    #[serde(rename = "ref")]
    pub reference: PathBuf,

    /// Gene names listed for this source
    pub genes: BTreeSet<String>,

    /// Path to the gzip-compressed HMM profiles
    pub hmm: PathBuf,

    /// Gene name -> Pfam accession
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pfam_ids: BTreeMap<String, String>,
}

impl SourceEntry {
    /// Build an entry for the source directory `dir` from its parsed gene list
    pub fn new(name: impl Into<String>, dir: &Path, gene_list: GeneList) -> Self {
        let genes: BTreeSet<String> = gene_list.genes().map(str::to_string).collect();
        let pfam_ids: BTreeMap<String, String> = gene_list
            .records
            .into_iter()
            .map(|(gene, record)| (gene, record.pfam_id))
            .collect();

        Self {
            name: name.into(),
            reference: dir.join(REFERENCE_FILE),
            genes,
            hmm: dir.join(HMM_FILE),
            pfam_ids,
        }
    }

    /// Number of genes in this source
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    /// Pfam accession for a gene, if the gene belongs to this source
    pub fn pfam_id(&self, gene: &str) -> Option<&str> {
        self.pfam_ids.get(gene).map(String::as_str)
    }

    /// Read the profile headers from this source's HMM file
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the HMM file cannot be read or is malformed.
    pub fn profiles(&self) -> Result<Vec<HmmProfile>, ParseError> {
        read_profiles(&self.hmm)
    }
}
