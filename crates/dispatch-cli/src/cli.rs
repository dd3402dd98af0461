//! CLI argument definitions for the dispatch normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dispatch",
    version,
    about = "Normalize emergency-dispatch activation exports and report mode/mean per column",
    long_about = "Load a semicolon-delimited activations export, drop incomplete rows,\n\
                  map Spanish month names to numbers, convert HH:MM:SS times to minutes\n\
                  since midnight, and report the mode and mean of each normalized column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize an activations file and report mode/mean per column.
    Summarize(SummarizeArgs),

    /// List the month names recognized in the month column.
    Months,
}

#[derive(Parser)]
pub struct SummarizeArgs {
    /// Path to the activations CSV file.
    #[arg(value_name = "CSV")]
    pub source: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(long = "delimiter", default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Source text encoding.
    #[arg(long = "encoding", value_enum, default_value = "utf8")]
    pub encoding: EncodingArg,

    /// Name of the month-name column.
    #[arg(long = "month-column", value_name = "NAME")]
    pub month_column: Option<String>,

    /// Name of the request time column.
    #[arg(long = "request-time-column", value_name = "NAME")]
    pub request_time_column: Option<String>,

    /// Name of the intervention time column.
    #[arg(long = "intervention-time-column", value_name = "NAME")]
    pub intervention_time_column: Option<String>,

    /// Name of the year column that is dropped before aggregation.
    #[arg(long = "year-column", value_name = "NAME")]
    pub year_column: Option<String>,

    /// Report output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be one ASCII character, got '{value}'")),
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    Utf8,
    Latin1,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Plain,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summarize_defaults() {
        let cli = Cli::try_parse_from(["dispatch", "summarize", "data.csv"]).unwrap();
        let Command::Summarize(args) = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(args.source, PathBuf::from("data.csv"));
        assert_eq!(args.delimiter, b';');
        assert!(matches!(args.encoding, EncodingArg::Utf8));
        assert!(matches!(args.format, ReportFormatArg::Table));
    }

    #[test]
    fn parse_summarize_overrides() {
        let cli = Cli::try_parse_from([
            "dispatch",
            "--log-format",
            "json",
            "summarize",
            "data.csv",
            "--delimiter",
            ",",
            "--encoding",
            "latin1",
            "--month-column",
            "MONTH",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        let Command::Summarize(args) = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(args.delimiter, b',');
        assert!(matches!(args.encoding, EncodingArg::Latin1));
        assert_eq!(args.month_column.as_deref(), Some("MONTH"));
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        assert!(Cli::try_parse_from(["dispatch", "summarize", "x.csv", "--delimiter", ";;"]).is_err());
    }
}
