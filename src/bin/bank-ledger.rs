use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use bank_ledger::bin_utils::{ScriptError, Service, demo};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// In-memory bank ledger
#[derive(Parser)]
#[command(name = "bank-ledger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a CSV operation script and print the balance statement
    Run {
        /// Script file with an `op,customer,account,to,amount,kind,name,address` header
        script: PathBuf,
    },
    /// Replay the built-in two-customer walkthrough
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { script } => {
            let file = File::open(&script)
                .with_context(|| format!("Failed to open `{}`", script.display()))?;
            let service = Service {
                input: file,
                output: &mut std::io::stdout(),
                error_printer: Box::new(|line, err| match err {
                    ScriptError::CommandErr(err) => eprintln!("Error at line {line}: {err}"),
                    ScriptError::LedgerErr(err) => warn!(line, "operation rejected: {err}"),
                }),
            };
            service.run()
        }
        Commands::Demo => demo::run(&mut std::io::stdout()),
    }
}
