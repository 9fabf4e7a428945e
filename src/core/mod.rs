//! Core data types for single-copy gene sources.
//!
//! - [`SourceEntry`](source::SourceEntry): one validated source directory with its gene set
//!   and the paths to its reference and HMM files
//! - [`GeneRecord`](types::GeneRecord): a `(pfam_id, gene)` row of a gene list
//! - [`HmmProfile`](types::HmmProfile): the header of one profile in an HMM file
//!
//! ## Source Layout
//!
//! Every source is a directory whose name is also used as an identifier
//! downstream, containing:
//!
//! | File | Contents |
//! |------|----------|
//! | `reference.txt` | Free-text description of where the genes come from |
//! | `genes.txt` | Tab-delimited `pfam_id`, `gene` rows with a header line |
//! | `genes.hmm.gz` | Gzip-compressed HMMER3 profiles |

pub mod source;
pub mod types;
