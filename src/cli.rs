use clap::{Parser, Subcommand};

use crate::domain::{Part, ShortNotation, Signature};
use crate::logging::LogFormat;

/// Parses a part given on the command line in short notation
fn parse_part(s: &str) -> Result<Part, String> {
    Part::from_short_notation(s)
        .ok_or_else(|| format!("'{s}' is not a valid part (expected <version>|<threshold>|<total>|<data>)"))
}

#[derive(Parser)]
#[command(name = "coldshare")]
#[command(about = "Split a private key into cold wallet parts and recover it from them")]
#[command(version)]
pub struct Cli {
    /// Log filter, e.g. "warn" or "debug,coldshare=trace" (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn", env = "COLDSHARE_LOG")]
    pub log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Human, env = "COLDSHARE_LOG_FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate wallet parts from a private key read on stdin
    Generate {
        /// Minimum number of parts needed to recover the key
        #[arg(short, long)]
        threshold: i32,

        /// Number of parts to create
        #[arg(short = 'n', long)]
        total: i32,

        /// Scheme version recorded in every part
        #[arg(long, default_value_t = Signature::CURRENT_VERSION)]
        scheme_version: i32,
    },
    /// Recover a private key from parts
    Recover {
        /// Parts in short notation; read from stdin (one per line) when omitted
        #[arg(value_parser = parse_part)]
        parts: Vec<Part>,
    },
}
