//! Interactive shell over a single fixed-capacity in-memory table.
//!
//! ```bash
//! # interactive session
//! pagesql
//!
//! # run commands from a file, no prompts
//! pagesql commands.txt
//! ```

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagesql::{Session, Table};

/// Minimal insert/select shell over a paged in-memory table
#[derive(Parser, Debug)]
#[command(name = "pagesql", version, about)]
struct Args {
    /// Read commands from this file instead of standard input
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open '{}'", path.display()))?;
            Session::new(Table::new(), false).run(BufReader::new(file), &mut out)?;
        }
        None => {
            Session::new(Table::new(), true).run(io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pagesql=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagesql=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
