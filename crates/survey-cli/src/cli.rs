//! Argument definitions for the `survey` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use survey_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Load, clean and check fixed-width survey files",
    long_about = "Decode fixed-width survey data described by a Stata-style .dct dictionary.\n\n\
                  Data files ending in .gz are decompressed while streaming. The check\n\
                  command cleans the NSFG 2002 pregnancy file and compares it against\n\
                  its published reference statistics."
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

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a dictionary and list its fields.
    Schema(SchemaArgs),

    /// Decode a data file and summarize its columns.
    Load(LoadArgs),

    /// Load, clean and compare against the reference statistics.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Dictionary (.dct) file.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Dictionary (.dct) file.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Fixed-width data file, optionally gzip-compressed.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Apply the pregnancy cleaning pipeline before summarizing.
    #[arg(long = "clean")]
    pub clean: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// TOML run file with a [dataset] table.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dictionary file (overrides the run file and SURVEY_DATA_DIR).
    #[arg(long = "dictionary", value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Data file (overrides the run file and SURVEY_DATA_DIR).
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormatArg,

    /// Exit with status 1 when any check fails.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_overrides_verbosity() {
        let cli = Cli::try_parse_from(["survey", "-vv", "--log-level", "error", "schema", "x.dct"])
            .expect("parse");
        assert_eq!(cli.log_level.map(LevelFilter::from), Some(LevelFilter::ERROR));
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Pretty);
    }

    #[test]
    fn log_format_maps_to_logging_format() {
        let cli = Cli::try_parse_from(["survey", "--log-format", "json", "schema", "x.dct"])
            .expect("parse");
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
        assert!(cli.log_level.is_none());
    }
}
