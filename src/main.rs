//! `motif`: play design-pattern scenes on the terminal.
//!
//! ```text
//! motif                          # every scene
//! motif middleware proxy         # just these two
//! motif singleton --settings home.toml
//! RUST_LOG=motif=trace motif middleware
//! ```
//!
//! Scene transcripts go to stdout. Diagnostics go to stderr through
//! `tracing`, filtered by `RUST_LOG`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use motif::config::SmartHomeConfig;
use motif::demo::{self, Pattern};

#[derive(Debug, Parser)]
#[command(name = "motif", version, about = "Classic design patterns, one smart-home scene at a time")]
struct Cli {
    /// Scenes to play, in order. Plays all of them when omitted.
    #[arg(value_enum)]
    patterns: Vec<Pattern>,

    /// TOML file seeding the shared smart-home settings.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("motif: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> motif::Result<()> {
    let config = match &cli.settings {
        Some(path) => SmartHomeConfig::load(path)?,
        None => SmartHomeConfig::new(),
    }
    .shared();

    let patterns: &[Pattern] = if cli.patterns.is_empty() { &Pattern::ALL } else { &cli.patterns };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_many(patterns, &mut out, &config)?;
    out.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
