//! Ownership-records browser over a flat text file.
//!
//! Reads `"owner" DD.MM.YYYY cost` lines from the input file, skips
//! invalid ones with a diagnostic on stderr, then serves an interactive
//! sort/show menu on the console.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use housebook::{browse, exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "housebook",
    version,
    about = "Browse and sort real-estate ownership records"
)]
struct Cli {
    /// Input file, one `"owner" DD.MM.YYYY cost` record per line.
    #[arg(default_value = "1.txt")]
    file: PathBuf,
}

fn main() {
    logging::init();

    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::OPEN_FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    browse::run(&cli.file, stdin.lock(), io::stdout(), io::stderr())
}
