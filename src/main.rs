use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("scg_catalog=debug,info")
    } else {
        EnvFilter::new("scg_catalog=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::List => {
            cli::catalog::run_list(&cli.sources, cli.format, cli.verbose)?;
        }
        cli::Commands::Show(args) => {
            cli::catalog::run_show(&cli.sources, &args, cli.format)?;
        }
        cli::Commands::Export(args) => {
            cli::catalog::run_export(&cli.sources, &args)?;
        }
        cli::Commands::Check => {
            cli::check::run(&cli.sources, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
