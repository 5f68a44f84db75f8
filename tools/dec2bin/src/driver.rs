//! Line driver - reads `DECIMAL [BINARY]` lines and writes one result per line

use anyhow::{Context, Result};
use binfrac::{convert_with_limit, matches, render_unrolled, BinaryExpansion};
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::config::OutputFormat;

#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub output: OutputFormat,
    /// Unroll conversions to this many fractional bits instead of `(...)` notation
    pub expand: Option<usize>,
    /// Cap on stored fraction bits per conversion
    pub max_bits: usize,
    pub keep_going: bool,
    pub color: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            expand: None,
            max_bits: binfrac::DEFAULT_MAX_EXPANSION_BITS,
            keep_going: false,
            color: false,
        }
    }
}

/// Result of one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineReport {
    /// Line without a target: the binary form of the decimal
    Converted {
        input: String,
        binary: String,
        expansion: BinaryExpansion,
    },
    /// Line with a target: whether it is a prefix of the expansion
    Compared {
        input: String,
        target: String,
        matched: bool,
        /// Digits after the target's own `.`, 0 when it has none
        fraction_digits: usize,
    },
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted { binary, .. } => f.write_str(binary),
            Self::Compared {
                matched,
                fraction_digits,
                ..
            } => {
                let verdict = if *matched { "Matched!" } else { "Unmatched..." };
                write!(f, "{} {}", verdict, fraction_digits)
            }
        }
    }
}

/// Lines handled by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub skipped: usize,
}

pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    /// Convert the first token of `line` and, when a second token follows the
    /// first space, check it against the expansion.
    pub fn process_line(&self, line: &str) -> binfrac::Result<LineReport> {
        let (decimal, target) = match line.split_once(' ') {
            Some((decimal, target)) => (decimal, Some(target)),
            None => (line, None),
        };

        let expansion = convert_with_limit(decimal, self.options.max_bits)?;

        let report = match target {
            None => LineReport::Converted {
                input: decimal.to_string(),
                binary: self.format_expansion(&expansion),
                expansion,
            },
            Some(target) => LineReport::Compared {
                input: decimal.to_string(),
                target: target.to_string(),
                matched: matches(&expansion, target),
                fraction_digits: target_fraction_digits(target),
            },
        };
        Ok(report)
    }

    fn format_expansion(&self, expansion: &BinaryExpansion) -> String {
        match self.options.expand {
            None => expansion.to_string(),
            Some(bits) => render_unrolled(expansion, bits),
        }
    }

    /// Process lines until an empty line or end of input
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() {
                debug!(line = line_no, "empty line, stopping");
                break;
            }
            self.handle_line(line_no, line, &mut writer, &mut summary)?;
        }

        writer.flush().context("Failed to flush output")?;
        Ok(summary)
    }

    /// Process lines given directly, e.g. on the command line
    pub fn run_lines<W: Write>(&self, lines: &[String], mut writer: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for (index, line) in lines.iter().enumerate() {
            self.handle_line(index + 1, line, &mut writer, &mut summary)?;
        }
        writer.flush().context("Failed to flush output")?;
        Ok(summary)
    }

    fn handle_line<W: Write>(
        &self,
        line_no: usize,
        line: &str,
        writer: &mut W,
        summary: &mut RunSummary,
    ) -> Result<()> {
        match self.process_line(line) {
            Ok(report) => {
                self.write_report(&report, writer)
                    .with_context(|| format!("Failed to write result for line {}", line_no))?;
                summary.processed += 1;
                Ok(())
            }
            Err(e) if self.options.keep_going => {
                warn!(line = line_no, error = %e, "skipping line");
                summary.skipped += 1;
                Ok(())
            }
            Err(e) => Err(e).with_context(|| format!("Line {}: cannot convert '{}'", line_no, line)),
        }
    }

    fn write_report<W: Write>(&self, report: &LineReport, writer: &mut W) -> Result<()> {
        match self.options.output {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)?;
            }
            OutputFormat::Text if self.options.color => match report {
                LineReport::Compared {
                    matched: true,
                    fraction_digits,
                    ..
                } => writeln!(writer, "{} {}", "Matched!".green().bold(), fraction_digits)?,
                LineReport::Compared {
                    matched: false,
                    fraction_digits,
                    ..
                } => writeln!(writer, "{} {}", "Unmatched...".red(), fraction_digits)?,
                LineReport::Converted { .. } => writeln!(writer, "{}", report)?,
            },
            OutputFormat::Text => writeln!(writer, "{}", report)?,
        }
        Ok(())
    }
}

/// Number of characters after the first `.` in `target`
fn target_fraction_digits(target: &str) -> usize {
    target
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().count())
}
