use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// nutriplan - Meal plan nutrition
#[derive(Parser)]
#[command(name = "nutriplan")]
#[command(about = "Meal plan nutrition summaries and exports", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a plan's nutrition summary
    Summary {
        /// Meal plan JSON file
        #[arg(long)]
        plan: PathBuf,
    },
    /// Export a plan to a file
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },
    /// List the food dataset
    Foods {
        /// Only foods whose description contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// List measurement units
    Units,
}

#[derive(Subcommand)]
enum ExportFormat {
    /// CSV spreadsheet
    Csv {
        #[arg(long)]
        plan: PathBuf,

        /// Output directory (overrides config file)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Printable report
    Report {
        #[arg(long)]
        plan: PathBuf,

        /// Output directory (overrides config file)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Report language (overrides config file)
        #[arg(long)]
        locale: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = nutriplan::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    nutriplan::observability::init_observability(
        "nutriplan",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Summary { plan } => nutriplan::cli::summary(&config, &plan, &mut stdout),
        Commands::Export { format } => {
            let path = match format {
                ExportFormat::Csv { plan, out } => nutriplan::cli::export_csv(&config, &plan, out)?,
                ExportFormat::Report { plan, out, locale } => {
                    nutriplan::cli::export_report(&config, &plan, out, locale)?
                }
            };
            writeln!(stdout, "{}", path.display())?;
            Ok(())
        }
        Commands::Foods { search } => {
            nutriplan::cli::foods(&config, search.as_deref(), &mut stdout)
        }
        Commands::Units => nutriplan::cli::units(&mut stdout),
    }
}
