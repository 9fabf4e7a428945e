//! Discovery and validation of source directories.
//!
//! A source is accepted only if its directory name is a safe identifier and
//! it contains every file in [`REQUIRED_FILES`]. By default the first invalid
//! source aborts the load; [`LoaderConfig::collect_all_errors`] validates all
//! of them first and reports every failure at once. Either way, no catalog is
//! produced unless every candidate is valid.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::store::{CatalogError, SourceCatalog};
use crate::core::source::{SourceEntry, GENES_FILE, REQUIRED_FILES};
use crate::parsing::tsv::parse_gene_list_file;
use crate::utils::validation::{disallowed_chars, is_valid_source_name};

/// Options controlling how sources are loaded
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Validate every source before failing instead of stopping at the first
    /// invalid one
    pub collect_all_errors: bool,
}

/// Builds a [`SourceCatalog`] from a directory of sources
#[derive(Debug, Clone, Default)]
pub struct SourceLoader {
    config: LoaderConfig,
}

impl SourceLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load every source under `base_dir` and log a summary of the result
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadDir` if `base_dir` cannot be listed, or the
    /// validation error(s) of the invalid source(s).
    pub fn load(&self, base_dir: &Path) -> Result<SourceCatalog, CatalogError> {
        let candidates = discover_candidates(base_dir)?;
        debug!(
            "Found {} candidate source(s) in {}",
            candidates.len(),
            base_dir.display()
        );

        let mut catalog = SourceCatalog::new(base_dir);
        let mut errors = Vec::new();

        for dir in candidates {
            match load_source(&dir) {
                Ok(entry) => {
                    debug!("Loaded source '{}' ({} genes)", entry.name, entry.gene_count());
                    catalog.add_source(entry);
                }
                Err(e) if self.config.collect_all_errors => {
                    debug!("Invalid source {}: {e}", dir.display());
                    errors.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        if !errors.is_empty() {
            return Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                CatalogError::Multiple(errors)
            });
        }

        catalog.summary().log();
        Ok(catalog)
    }
}

/// List the candidate source directories directly under `base_dir`.
///
/// Only directories (following symlinks) are candidates; hidden entries are
/// skipped. The result is sorted by path so that validation order does not
/// depend on the filesystem.
///
/// # Errors
///
/// Returns `CatalogError::ReadDir` if the directory cannot be listed.
pub fn discover_candidates(base_dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let read_dir_error = |source| CatalogError::ReadDir {
        path: base_dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(base_dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            debug!("Skipping hidden entry {}", path.display());
            continue;
        }

        if !path.is_dir() {
            debug!("Skipping non-directory entry {}", path.display());
            continue;
        }

        candidates.push(path);
    }

    candidates.sort();
    Ok(candidates)
}

/// Return the source name of a candidate directory if it is a valid identifier
///
/// # Errors
///
/// Returns `CatalogError::InvalidSourceName` if the basename is not UTF-8 or
/// contains characters outside `[A-Za-z0-9_.]`.
pub fn validate_source_name(dir: &Path) -> Result<String, CatalogError> {
    let file_name = dir.file_name().unwrap_or(dir.as_os_str());

    let Some(name) = file_name.to_str() else {
        return Err(CatalogError::InvalidSourceName {
            name: file_name.to_string_lossy().into_owned(),
            found: "non-UTF-8 bytes".to_string(),
        });
    };

    if is_valid_source_name(name) {
        return Ok(name.to_string());
    }

    let found = disallowed_chars(name)
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(CatalogError::InvalidSourceName {
        name: name.to_string(),
        found: if found.is_empty() {
            "empty name".to_string()
        } else {
            found
        },
    })
}

/// Required files that do not exist in `dir`
pub fn missing_required_files(dir: &Path) -> Vec<&'static str> {
    REQUIRED_FILES
        .into_iter()
        .filter(|f| !dir.join(f).exists())
        .collect()
}

/// Validate a single source directory and parse its gene list
///
/// # Errors
///
/// Returns `CatalogError::InvalidSourceName`, `CatalogError::IncompleteSource`
/// or `CatalogError::MalformedGeneList`.
pub fn load_source(dir: &Path) -> Result<SourceEntry, CatalogError> {
    let name = validate_source_name(dir)?;

    let missing = missing_required_files(dir);
    if !missing.is_empty() {
        return Err(CatalogError::IncompleteSource { name, missing });
    }

    let genes_path = dir.join(GENES_FILE);
    let gene_list = match parse_gene_list_file(&genes_path) {
        Ok(list) => list,
        Err(source) => {
            return Err(CatalogError::MalformedGeneList {
                name,
                path: genes_path,
                source,
            })
        }
    };

    if gene_list.is_empty() {
        tracing::warn!("Source '{name}' lists no genes in {}", genes_path.display());
    }

    Ok(SourceEntry::new(name, dir, gene_list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_source(base: &Path, name: &str, genes: &str) -> PathBuf {
        let dir = base.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("reference.txt"), "Test reference\n").unwrap();
        fs::write(dir.join("genes.txt"), genes).unwrap();
        fs::write(dir.join("genes.hmm.gz"), b"").unwrap();
        dir
    }

    #[test]
    fn test_validate_source_name() {
        assert_eq!(
            validate_source_name(Path::new("/x/Bacteria97")).unwrap(),
            "Bacteria97"
        );
        match validate_source_name(Path::new("/x/bad name-1")) {
            Err(CatalogError::InvalidSourceName { name, found }) => {
                assert_eq!(name, "bad name-1");
                assert_eq!(found, "' ', '-'");
            }
            other => panic!("Expected InvalidSourceName, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_source_name_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new("/x").join(OsStr::from_bytes(b"Bacteria\xff97"));
        match validate_source_name(&dir) {
            Err(CatalogError::InvalidSourceName { name, found }) => {
                assert_eq!(name, "Bacteria\u{fffd}97");
                assert_eq!(found, "non-UTF-8 bytes");
            }
            other => panic!("Expected InvalidSourceName, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("S");
        fs::create_dir(&dir).unwrap();
        assert_eq!(missing_required_files(&dir), REQUIRED_FILES.to_vec());

        fs::write(dir.join("genes.txt"), "pfam_id\tgene\n").unwrap();
        assert_eq!(
            missing_required_files(&dir),
            vec!["reference.txt", "genes.hmm.gz"]
        );
    }

    #[test]
    fn test_required_file_may_be_a_directory() {
        // Presence is an existence check only
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_source(tmp.path(), "S", "pfam_id\tgene\n");
        fs::remove_file(dir.join("reference.txt")).unwrap();
        fs::create_dir(dir.join("reference.txt")).unwrap();
        assert!(missing_required_files(&dir).is_empty());
    }

    #[test]
    fn test_discover_candidates_filters_by_type() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(tmp.path(), "Bacteria97", "pfam_id\tgene\n");
        fs::create_dir(tmp.path().join("markers.txt.d")).unwrap();
        fs::create_dir(tmp.path().join(".hidden")).unwrap();
        fs::write(tmp.path().join("__init__.py"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let names: Vec<_> = discover_candidates(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Bacteria97", "markers.txt.d"]);
    }

    #[test]
    fn test_discover_candidates_missing_base_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let result = discover_candidates(&tmp.path().join("absent"));
        assert!(matches!(result, Err(CatalogError::ReadDir { .. })));
    }

    #[test]
    fn test_load_source() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_source(
            tmp.path(),
            "Ecoli_markers",
            "pfam_id\tgene\nPF00001\tgeneA\nPF00002\tgeneB\n",
        );

        let entry = load_source(&dir).unwrap();
        assert_eq!(entry.name, "Ecoli_markers");
        assert_eq!(entry.gene_count(), 2);
        assert_eq!(entry.reference, dir.join("reference.txt"));
        assert_eq!(entry.hmm, dir.join("genes.hmm.gz"));
    }

    #[test]
    fn test_load_source_malformed_gene_list() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = write_source(tmp.path(), "Broken", "pfam_id\tgene\nPF00001\n");

        match load_source(&dir) {
            Err(CatalogError::MalformedGeneList { name, path, .. }) => {
                assert_eq!(name, "Broken");
                assert_eq!(path, dir.join("genes.txt"));
            }
            other => panic!("Expected MalformedGeneList, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_collects_all_errors() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(tmp.path(), "Good", "pfam_id\tgene\nPF00001\tgeneA\n");
        write_source(tmp.path(), "bad-name", "pfam_id\tgene\n");
        fs::create_dir(tmp.path().join("Incomplete")).unwrap();

        let loader = SourceLoader::new(LoaderConfig {
            collect_all_errors: true,
        });
        match loader.load(tmp.path()) {
            Err(CatalogError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(matches!(errors[0], CatalogError::IncompleteSource { .. }));
                assert!(matches!(errors[1], CatalogError::InvalidSourceName { .. }));
            }
            other => panic!("Expected Multiple, got {other:?}"),
        }
    }

    #[test]
    fn test_loader_single_collected_error_is_unwrapped() {
        let tmp = tempfile::tempdir().unwrap();
        write_source(tmp.path(), "Good", "pfam_id\tgene\nPF00001\tgeneA\n");
        fs::create_dir(tmp.path().join("Incomplete")).unwrap();

        let loader = SourceLoader::new(LoaderConfig {
            collect_all_errors: true,
        });
        assert!(matches!(
            loader.load(tmp.path()),
            Err(CatalogError::IncompleteSource { .. })
        ));
    }
}
