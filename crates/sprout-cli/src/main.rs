use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::civil::Date;
use tracing_subscriber::EnvFilter;

use sprout_cli::config::{self, LogFormat};

mod commands;

#[derive(Parser)]
#[command(name = "sprout", version, about = "Developmental assessment scoring")]
struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the protocols in the catalog
    Protocols,

    /// Summarize a score map against a protocol
    Summarize {
        /// Protocol id (e.g. "portage")
        #[arg(long)]
        protocol: String,

        /// JSON object of item id -> score record
        #[arg(long)]
        scores: PathBuf,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check persisted summaries against a fresh recomputation
    Verify {
        /// JSON array of evaluations
        #[arg(long)]
        evaluations: PathBuf,
    },

    /// Progress across a subject's completed evaluations, oldest first
    Trend {
        /// JSON array of evaluations
        #[arg(long)]
        evaluations: PathBuf,

        /// How many domains to rank
        #[arg(long, default_value = "3")]
        top: usize,

        #[arg(long)]
        json: bool,
    },

    /// Chronological age in months
    Age {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth: Date,

        /// Evaluation date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        on: Option<Date>,
    },
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    init_logging(config.log_format);
    tracing::debug!(path = %config_path.display(), "config loaded");

    let catalog = config::build_catalog(&config)?;

    match cli.command {
        Commands::Protocols => commands::list_protocols(&catalog),
        Commands::Summarize {
            protocol,
            scores,
            json,
        } => commands::summarize(&catalog, &protocol, &scores, json)?,
        Commands::Verify { evaluations } => {
            let mismatches = commands::verify(&catalog, &evaluations)?;
            if mismatches > 0 {
                tracing::warn!(mismatches, "stale summaries found");
                process::exit(1);
            }
        }
        Commands::Trend {
            evaluations,
            top,
            json,
        } => commands::trend(&evaluations, top, json)?,
        Commands::Age { birth, on } => {
            let on = on.unwrap_or_else(|| jiff::Zoned::now().date());
            commands::age(birth, on)?;
        }
    }
    Ok(())
}
