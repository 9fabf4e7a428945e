use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use crate::catalog::builder::LoaderConfig;
use crate::catalog::store::SourceCatalog;
use crate::cli::OutputFormat;
use crate::core::source::SourceEntry;
use crate::core::types::HmmProfile;

/// Result of comparing a source's gene list with its HMM profiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceCheck {
    pub name: String,
    pub gene_count: usize,
    pub profile_count: usize,

    /// Genes with no profile of the same name
    pub genes_without_profile: Vec<String>,

    /// Profiles with no gene of the same name
    pub profiles_without_gene: Vec<String>,

    /// Error reading the HMM file, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmm_error: Option<String>,
}

impl SourceCheck {
    pub fn is_ok(&self) -> bool {
        self.hmm_error.is_none()
            && self.genes_without_profile.is_empty()
            && self.profiles_without_gene.is_empty()
    }
}

/// Compare a gene set with the profiles read from the HMM file
pub fn compare_genes_and_profiles(source: &SourceEntry, profiles: &[HmmProfile]) -> SourceCheck {
    let profile_names: BTreeSet<&str> = profiles.iter().map(|p| p.name.as_str()).collect();

    let genes_without_profile = source
        .genes
        .iter()
        .filter(|g| !profile_names.contains(g.as_str()))
        .cloned()
        .collect();

    let profiles_without_gene = profile_names
        .iter()
        .filter(|p| !source.genes.contains(**p))
        .map(|p| (*p).to_string())
        .collect();

    SourceCheck {
        name: source.name.clone(),
        gene_count: source.gene_count(),
        profile_count: profiles.len(),
        genes_without_profile,
        profiles_without_gene,
        hmm_error: None,
    }
}

/// Check a single source, turning HMM read failures into a reported problem
pub fn check_source(source: &SourceEntry) -> SourceCheck {
    match source.profiles() {
        Ok(profiles) => compare_genes_and_profiles(source, &profiles),
        Err(e) => SourceCheck {
            name: source.name.clone(),
            gene_count: source.gene_count(),
            hmm_error: Some(format!("{}: {e}", source.hmm.display())),
            ..SourceCheck::default()
        },
    }
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if any source fails validation or any source's genes and
/// profiles disagree.
pub fn run(sources_dir: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = LoaderConfig {
        collect_all_errors: true,
    };
    let catalog = SourceCatalog::load_with_config(sources_dir, &config)?;

    if verbose {
        eprintln!("Checking HMM profiles of {} sources", catalog.len());
    }

    let checks: Vec<SourceCheck> = catalog.iter().map(check_source).collect();
    let failed = checks.iter().filter(|c| !c.is_ok()).count();

    match format {
        OutputFormat::Text => {
            for check in &checks {
                print_check_text(check);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&checks)?);
        }
        OutputFormat::Tsv => {
            println!("name\tgene_count\tprofile_count\tgenes_without_profile\tprofiles_without_gene\thmm_error");
            for c in &checks {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    c.name,
                    c.gene_count,
                    c.profile_count,
                    c.genes_without_profile.join(","),
                    c.profiles_without_gene.join(","),
                    c.hmm_error.as_deref().unwrap_or("")
                );
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} sources failed the HMM check", checks.len());
    }

    Ok(())
}

fn print_check_text(check: &SourceCheck) {
    let status = if check.is_ok() { "OK" } else { "FAIL" };
    println!(
        "[{status}] {}: {} genes, {} profiles",
        check.name, check.gene_count, check.profile_count
    );
    if let Some(err) = &check.hmm_error {
        println!("  Cannot read HMM file: {err}");
    }
    if !check.genes_without_profile.is_empty() {
        println!(
            "  Genes without a profile: {}",
            check.genes_without_profile.join(", ")
        );
    }
    if !check.profiles_without_gene.is_empty() {
        println!(
            "  Profiles without a gene: {}",
            check.profiles_without_gene.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tsv::parse_gene_list_text;

    fn profile(name: &str) -> HmmProfile {
        HmmProfile {
            name: name.to_string(),
            accession: None,
        }
    }

    #[test]
    fn test_compare_genes_and_profiles() {
        let list = parse_gene_list_text("pfam_id\tgene\nPF1\tgeneA\nPF2\tgeneB\n").unwrap();
        let source = SourceEntry::new("S", Path::new("/s/S"), list);

        let check = compare_genes_and_profiles(&source, &[profile("geneA"), profile("geneC")]);
        assert_eq!(check.gene_count, 2);
        assert_eq!(check.profile_count, 2);
        assert_eq!(check.genes_without_profile, vec!["geneB"]);
        assert_eq!(check.profiles_without_gene, vec!["geneC"]);
        assert!(!check.is_ok());

        let check = compare_genes_and_profiles(&source, &[profile("geneB"), profile("geneA")]);
        assert!(check.is_ok());
    }

    #[test]
    fn test_check_source_unreadable_hmm() {
        let source = SourceEntry::new(
            "Missing",
            Path::new("/definitely/not/here"),
            parse_gene_list_text("pfam_id\tgene\n").unwrap(),
        );
        let check = check_source(&source);
        assert!(check.hmm_error.is_some());
        assert!(!check.is_ok());
    }
}
