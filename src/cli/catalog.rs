use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::store::SourceCatalog;
use crate::cli::OutputFormat;
use crate::core::source::SourceEntry;

#[derive(Args)]
pub struct ShowArgs {
    /// Source name
    #[arg(required = true)]
    pub name: String,

    /// Show all genes (by default only the first 20 are listed)
    #[arg(long)]
    pub all_genes: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,
}

/// Number of genes printed by `show` unless `--all-genes` is given
const DEFAULT_GENES_SHOWN: usize = 20;

/// Execute list subcommand
///
/// # Errors
///
/// Returns an error if any source fails validation.
pub fn run_list(sources_dir: &Path, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = SourceCatalog::load(sources_dir)?;

    if verbose {
        eprintln!(
            "Loaded {} sources with {} genes from {}",
            catalog.len(),
            catalog.total_genes(),
            sources_dir.display()
        );
    }

    match format {
        OutputFormat::Text => {
            let name_width = catalog
                .names()
                .map(str::len)
                .max()
                .unwrap_or(6)
                .max(6);

            println!("Single-copy gene sources ({})\n", catalog.len());
            println!(
                "{:<name_w$} {:>6}  {}",
                "Source",
                "Genes",
                "HMM",
                name_w = name_width
            );
            println!("{}", "-".repeat(name_width + 9 + 40));

            for source in catalog.iter() {
                println!(
                    "{:<name_w$} {:>6}  {}",
                    source.name,
                    source.gene_count(),
                    source.hmm.display(),
                    name_w = name_width
                );
                if verbose {
                    println!("  └─ Reference: {}", source.reference.display());
                }
            }

            println!("\n{}", catalog.summary());
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = catalog
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "name": s.name,
                        "gene_count": s.gene_count(),
                        "ref": s.reference,
                        "hmm": s.hmm,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tgene_count\tref\thmm");
            for s in catalog.iter() {
                println!(
                    "{}\t{}\t{}\t{}",
                    s.name,
                    s.gene_count(),
                    s.reference.display(),
                    s.hmm.display()
                );
            }
        }
    }

    Ok(())
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if any source fails validation or the named source does
/// not exist.
pub fn run_show(sources_dir: &Path, args: &ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = SourceCatalog::load(sources_dir)?;
    let source = catalog.get(&args.name).ok_or_else(|| {
        anyhow::anyhow!(
            "Source '{}' not found (available: {})",
            args.name,
            catalog.names().collect::<Vec<_>>().join(", ")
        )
    })?;

    match format {
        OutputFormat::Text => print_source_text(source, args.all_genes),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(source)?);
        }
        OutputFormat::Tsv => {
            println!("pfam_id\tgene");
            for gene in &source.genes {
                println!("{}\t{gene}", source.pfam_id(gene).unwrap_or(""));
            }
        }
    }

    Ok(())
}

fn print_source_text(source: &SourceEntry, all_genes: bool) {
    println!("Source:    {}", source.name);
    println!("Reference: {}", source.reference.display());
    println!("HMM:       {}", source.hmm.display());
    println!("Genes:     {}", source.gene_count());

    if source.genes.is_empty() {
        return;
    }

    println!();
    println!("{:<12} Gene", "Pfam ID");
    let limit = if all_genes {
        source.genes.len()
    } else {
        DEFAULT_GENES_SHOWN
    };
    for gene in source.genes.iter().take(limit) {
        println!("{:<12} {gene}", source.pfam_id(gene).unwrap_or("-"));
    }
    if source.genes.len() > limit {
        println!(
            "... and {} more (use --all-genes to list them)",
            source.genes.len() - limit
        );
    }
}

/// Execute export subcommand
///
/// # Errors
///
/// Returns an error if any source fails validation or the output cannot be
/// written.
pub fn run_export(sources_dir: &Path, args: &ExportArgs) -> anyhow::Result<()> {
    let catalog = SourceCatalog::load(sources_dir)?;
    let json = catalog.to_json()?;
    std::fs::write(&args.output, json)?;
    eprintln!(
        "Exported {} sources to {}",
        catalog.len(),
        args.output.display()
    );
    Ok(())
}
