//! Single-copy gene source catalog.
//!
//! A catalog is built by scanning a base directory in which every
//! subdirectory is one source of single-copy gene HMMs. Each source is
//! validated (name charset, required files, gene list format) and the first
//! invalid source aborts the build.
//!
//! ## Example
//!
//! ```rust,no_run
//! use scg_catalog::SourceCatalog;
//! use std::path::Path;
//!
//! let catalog = SourceCatalog::load(Path::new("data/hmm")).unwrap();
//!
//! for source in catalog.iter() {
//!     println!("{}: {} genes", source.name, source.gene_count());
//! }
//!
//! println!("{}", catalog.summary());
//! ```
//!
//! ## Collecting All Errors
//!
//! ```rust,no_run
//! use scg_catalog::catalog::builder::LoaderConfig;
//! use scg_catalog::SourceCatalog;
//! use std::path::Path;
//!
//! let config = LoaderConfig { collect_all_errors: true };
//! match SourceCatalog::load_with_config(Path::new("data/hmm"), &config) {
//!     Ok(catalog) => println!("{} sources", catalog.len()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod builder;
pub mod store;
pub mod summary;
