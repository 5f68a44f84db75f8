//! Command-line and environment configuration for dec2bin

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::driver::DriverOptions;

#[derive(Parser, Debug)]
#[command(name = "dec2bin")]
#[command(about = "Convert decimal fractions to exact binary, marking repeating sections")]
#[command(long_about = "Convert decimal fractions to exact binary, marking repeating sections

Each input line is a decimal number, optionally followed by a space and a
binary string to check against the expansion:

  0.1            ->  0.0(0011)
  2.5 10.10000   ->  Matched! 5
  2.5 10.11      ->  Unmatched... 2

Input ends at the first empty line or end of file.")]
#[command(version)]
pub struct Cli {
    /// Lines to process instead of reading input (e.g. "0.1" "2.5 10.1")
    #[arg(value_name = "LINE")]
    pub lines: Vec<String>,

    /// Read lines from a file instead of standard input
    #[arg(short, long, env = "DEC2BIN_INPUT", conflicts_with = "lines")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, env = "DEC2BIN_OUTPUT", value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Print conversions unrolled to this many fractional bits
    #[arg(short, long, env = "DEC2BIN_EXPAND", value_name = "BITS")]
    pub expand: Option<usize>,

    /// Fail a line whose expansion needs more fractional bits than this
    #[arg(
        long,
        env = "DEC2BIN_MAX_BITS",
        value_name = "BITS",
        default_value_t = binfrac::DEFAULT_MAX_EXPANSION_BITS
    )]
    pub max_bits: usize,

    /// Skip lines that fail to convert instead of stopping
    #[arg(short, long, env = "DEC2BIN_KEEP_GOING")]
    pub keep_going: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "DEC2BIN_VERBOSE")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, env = "DEC2BIN_NO_COLOR")]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `0.0(0011)` / `Matched! 5`
    Text,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Driver options; `stdout_is_terminal` gates colored output
    pub fn driver_options(&self, stdout_is_terminal: bool) -> DriverOptions {
        DriverOptions {
            output: self.output,
            expand: self.expand,
            max_bits: self.max_bits,
            keep_going: self.keep_going,
            color: stdout_is_terminal && !self.no_color && self.output == OutputFormat::Text,
        }
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["dec2bin"]).unwrap();
        assert!(cli.lines.is_empty());
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.expand, None);
        assert_eq!(cli.max_bits, binfrac::DEFAULT_MAX_EXPANSION_BITS);
        assert!(!cli.keep_going);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "dec2bin", "--output", "json", "--expand", "8", "--max-bits", "64", "-k", "0.1",
            "2.5 10.1",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.expand, Some(8));
        assert_eq!(cli.driver_options(false).max_bits, 64);
        assert!(cli.keep_going);
        assert_eq!(cli.lines, vec!["0.1".to_string(), "2.5 10.1".to_string()]);
    }

    #[test]
    fn test_input_conflicts_with_lines() {
        assert!(Cli::try_parse_from(["dec2bin", "--input", "in.txt", "0.1"]).is_err());
    }

    #[test]
    fn test_color_only_on_terminal_text_output() {
        let cli = Cli::try_parse_from(["dec2bin"]).unwrap();
        assert!(cli.driver_options(true).color);
        assert!(!cli.driver_options(false).color);

        let cli = Cli::try_parse_from(["dec2bin", "--no-color"]).unwrap();
        assert!(!cli.driver_options(true).color);

        let cli = Cli::try_parse_from(["dec2bin", "--output", "json"]).unwrap();
        assert!(!cli.driver_options(true).color);
    }
}
