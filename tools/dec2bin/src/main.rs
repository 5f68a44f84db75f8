//! dec2bin - decimal to exact binary converter
//!
//! Reads `DECIMAL [BINARY]` lines and prints either the binary expansion of
//! the decimal (repeating section in parentheses) or whether the binary
//! string is a prefix of it.

mod config;
mod driver;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing::debug;

use crate::config::Cli;
use crate::driver::Driver;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let options = cli.driver_options(io::stdout().is_terminal());
    colored::control::set_override(options.color);
    debug!(?options, "starting");

    let driver = Driver::new(options);
    let stdout = io::stdout().lock();

    let summary = if !cli.lines.is_empty() {
        driver.run_lines(&cli.lines, stdout)?
    } else if let Some(path) = cli.input.as_deref() {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        driver.run(BufReader::new(file), stdout)?
    } else {
        driver.run(io::stdin().lock(), stdout)?
    };

    debug!(
        processed = summary.processed,
        skipped = summary.skipped,
        "done"
    );
    Ok(())
}
