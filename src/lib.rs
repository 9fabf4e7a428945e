//! # scg-catalog
//!
//! A library for discovering single-copy gene (SCG) sources used to estimate
//! genome completion in metagenomic bins.
//!
//! Each source is a directory holding a free-text reference description, a
//! tab-delimited list of genes with their Pfam accessions, and a
//! gzip-compressed HMMER3 profile file. `scg-catalog` scans a base directory
//! for such sources, validates them, and builds an immutable catalog that the
//! HMM search stage can consume.
//!
//! ## Features
//!
//! - **Type-based discovery**: only subdirectories are considered sources
//! - **Identifier-safe names**: source names are restricted to `[A-Za-z0-9_.]`
//! - **Layout validation**: every source must carry its three required files
//! - **Gene list parsing**: strict two-column TSV with duplicate detection
//! - **Fail-fast or collect-all**: stop at the first bad source, or report them all
//! - **HMM cross-check**: compare listed genes with the profiles in the HMM file
//!
//! ## Example
//!
//! ```rust,no_run
//! use scg_catalog::SourceCatalog;
//! use std::path::Path;
//!
//! let catalog = SourceCatalog::load(Path::new("data/hmm")).unwrap();
//! if let Some(source) = catalog.get("Campbell_et_al") {
//!     println!("{} genes, profiles in {}", source.gene_count(), source.hmm.display());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Source discovery, validation, and the catalog itself
//! - [`core`]: Core data types for sources, gene records, and HMM profiles
//! - [`parsing`]: Parsers for gene lists and HMM files
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::builder::LoaderConfig;
pub use catalog::store::{CatalogError, SourceCatalog};
pub use catalog::summary::CatalogSummary;
pub use crate::core::source::SourceEntry;
pub use crate::core::types::*;
