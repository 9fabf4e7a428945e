use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::types::GeneRecord;

/// Column names expected in the header of a gene list
pub const GENE_LIST_COLUMNS: [&str; 2] = ["pfam_id", "gene"];

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing header line (expected columns: {})", GENE_LIST_COLUMNS.join(", "))]
    MissingHeader,

    #[error("Line {line} has {found} fields, expected {expected}")]
    WrongColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line} has an empty '{column}' field")]
    EmptyField { line: usize, column: &'static str },

    #[error("Duplicate gene '{gene}' on line {line}")]
    DuplicateGene { line: usize, gene: String },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// A parsed gene list, indexed by gene name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneList {
    /// gene -> record
    pub records: BTreeMap<String, GeneRecord>,
}

impl GeneList {
    /// Gene names (the index column)
    pub fn genes(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a tab-delimited gene list file with columns: `pfam_id`, `gene`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_gene_list_file(path: &Path) -> Result<GeneList, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_gene_list_text(&content)
}

/// Parse tab-delimited gene list text.
///
/// The first non-blank, non-comment line must be the `pfam_id`, `gene` header
/// (case-insensitive). Every following line must have exactly two non-empty
/// fields, and gene names must be unique.
///
/// # Errors
///
/// Returns `ParseError::MissingHeader` if there is no header line or the first
/// line is not the expected header, or `ParseError::WrongColumnCount`,
/// `ParseError::EmptyField` or `ParseError::DuplicateGene` for malformed rows.
pub fn parse_gene_list_text(text: &str) -> Result<GeneList, ParseError> {
    let mut list = GeneList::default();
    let mut seen_header = false;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();

        if fields.len() != GENE_LIST_COLUMNS.len() {
            return Err(ParseError::WrongColumnCount {
                line: line_num,
                expected: GENE_LIST_COLUMNS.len(),
                found: fields.len(),
            });
        }

        if !seen_header {
            seen_header = true;
            let matches_expected = fields
                .iter()
                .zip(GENE_LIST_COLUMNS)
                .all(|(found, expected)| found.eq_ignore_ascii_case(expected));
            if !matches_expected {
                return Err(ParseError::MissingHeader);
            }
            continue;
        }

        let (pfam_id, gene) = (fields[0], fields[1]);
        if pfam_id.is_empty() {
            return Err(ParseError::EmptyField {
                line: line_num,
                column: GENE_LIST_COLUMNS[0],
            });
        }
        if gene.is_empty() {
            return Err(ParseError::EmptyField {
                line: line_num,
                column: GENE_LIST_COLUMNS[1],
            });
        }

        if list.records.contains_key(gene) {
            return Err(ParseError::DuplicateGene {
                line: line_num,
                gene: gene.to_string(),
            });
        }

        list.records
            .insert(gene.to_string(), GeneRecord::new(pfam_id, gene));
    }

    if !seen_header {
        return Err(ParseError::MissingHeader);
    }

    Ok(list)
}
