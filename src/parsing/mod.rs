//! Parsers for the files inside a source directory.
//!
//! - **Gene lists** (`genes.txt`): tab-delimited `pfam_id`, `gene` rows,
//!   indexed by gene name
//! - **HMM profiles** (`genes.hmm.gz`): profile names and accessions from a
//!   gzip-compressed HMMER3 file
//!
//! ## Example
//!
//! ```rust,no_run
//! use scg_catalog::parsing::tsv::parse_gene_list_text;
//!
//! let list = parse_gene_list_text("pfam_id\tgene\nPF00181\tRibosomal_L2\n").unwrap();
//! assert_eq!(list.len(), 1);
//! ```

pub mod hmm;
pub mod tsv;
