//! Command-line interface for scg-catalog.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **list**: Load all sources and print one row per source
//! - **show**: Print the genes and Pfam accessions of one source
//! - **check**: Validate every source and cross-check genes against HMM profiles
//! - **export**: Write the loaded catalog to a JSON file
//!
//! ## Usage
//!
//! ```text
//! # List the sources bundled in data/hmm
//! scg-catalog list
//!
//! # Use another sources directory, JSON output for scripting
//! scg-catalog --sources /opt/scg --format json list
//!
//! # Report every problem instead of stopping at the first one
//! scg-catalog check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod check;

/// Default location of the single-copy gene sources
pub const DEFAULT_SOURCES_DIR: &str = "data/hmm";

#[derive(Parser)]
#[command(name = "scg-catalog")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Discover and validate single-copy gene HMM sources")]
#[command(
    long_about = "scg-catalog scans a directory of single-copy gene sources.\n\nEach source is a subdirectory containing reference.txt, genes.txt (pfam_id and gene columns) and genes.hmm.gz. Source names must consist of ASCII letters, digits, '_' and '.' only."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing the single-copy gene sources
    #[arg(short, long, global = true, default_value = DEFAULT_SOURCES_DIR)]
    pub sources: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all sources in the catalog
    List,

    /// Show details of a specific source
    Show(catalog::ShowArgs),

    /// Export the catalog to a JSON file
    Export(catalog::ExportArgs),

    /// Validate all sources and cross-check genes against HMM profiles
    Check,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
