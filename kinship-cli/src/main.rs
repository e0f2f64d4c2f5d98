//! Kinship: interactive family tree command tool.
//!
//! # Usage
//!
//! ```text
//! kinship [--quiet] [--file <PATH>] [--verbose]
//! ```
//!
//! Commands are read one per line:
//!
//! ```text
//! add person <name> <gender>
//! add relationship <kind> <ignored>
//! connect <name 1> as <relationship> of <name 2>
//! count sons|daughters|wives of <name>
//! father of <name>
//! exit
//! ```

mod logging;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use kinship_core::{ExitReason, Session, SessionSummary};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "kinship",
    version,
    about = "Record people and family relationships, then query them",
    long_about = None,
)]
struct Cli {
    /// Do not print the banner or the `> ` prompt.
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Read commands from a file instead of standard input.
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log at debug level on stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn run(self) -> Result<()> {
        let stdout = io::stdout().lock();
        let result = match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open command file '{}'", path.display()))?;
                Session::new(BufReader::new(file), stdout)
                    .quiet(self.quiet)
                    .run()
            }
            None => Session::new(io::stdin().lock(), stdout).quiet(self.quiet).run(),
        };
        finish(result)
    }
}

/// A closed stdout (`kinship | head -1`) ends the session like end of input.
fn finish(result: io::Result<SessionSummary>) -> Result<()> {
    match result {
        Ok(summary) => match summary.exit {
            ExitReason::ExitCommand => info!(commands = summary.commands, "exit command"),
            ExitReason::EndOfInput => info!(commands = summary.commands, "end of input"),
        },
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("standard output closed; stopping");
        }
        Err(err) => return Err(err).context("failed to write to standard output"),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()
}
