//! This file defines the command-line interface (CLI) for the piifw application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use piifw_core::config::{ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS};
use piifw_core::{ClientConfig, Endpoint, RedactionMode, RedactionStyle};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "piifw",
    author = "Zero Trust Security Labs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact PII from text using the PII Firewall Edge API",
    long_about = "piifw sends text to the PII Firewall Edge API and prints the redacted result. Fast mode covers structured PII such as emails, phone numbers, SSNs, card numbers, API keys and IBANs; deep mode additionally covers human names and addresses. Detected items are replaced by type labels (e.g. [EMAIL]) or masked with asterisks.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Path to a YAML file with `api_key`, `timeout_secs` and `base_url`.
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a client configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// RapidAPI key. Takes precedence over the configuration file.
    #[arg(long = "api-key", value_name = "KEY", env = ENV_API_KEY, hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (default: 10).
    #[arg(
        long = "timeout",
        value_name = "SECS",
        env = ENV_TIMEOUT_SECS,
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Alternate API host (staging deployments, local mocks).
    #[arg(long = "base-url", value_name = "URL", env = ENV_BASE_URL, hide = true, global = true)]
    pub base_url: Option<String>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client settings given on the command line or through the environment.
    pub fn client_overrides(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout,
            base_url: self.base_url.clone(),
        }
    }
}

/// All available commands for the `piifw` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Redacts an input file or stdin and writes the result.
    #[command(about = "Redacts an input file or stdin and writes the redacted text.")]
    Redact(RedactCommand),

    /// Reports whether an input contains PII without printing the redacted text.
    #[command(about = "Reports detections for an input without printing the redacted text.")]
    Scan(ScanCommand),
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write redacted output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Use deep mode (adds names and addresses; slower).")]
    pub deep: bool,

    #[arg(long, short = 'm', help = "Mask PII with asterisks instead of type labels.")]
    pub mask: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', conflicts_with = "json", help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    #[arg(long, help = "Print the full result (text, detections, warning) as JSON.")]
    pub json: bool,

    /// Suppress the redaction summary.
    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

impl RedactCommand {
    pub fn mode(&self) -> RedactionMode {
        select_mode(self.deep, self.mask)
    }
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, help = "Use deep mode (adds names and addresses; slower).")]
    pub deep: bool,

    /// Exit with a non-zero code if the number of detections exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with code 2 if the number of detections exceeds this threshold.")]
    pub fail_over_threshold: Option<u64>,

    /// Print scan summary as JSON to stdout.
    #[arg(long = "json-stdout", help = "Print the scan summary to stdout as JSON.")]
    pub json_stdout: bool,
}

impl ScanCommand {
    pub fn mode(&self) -> RedactionMode {
        select_mode(self.deep, false)
    }
}

fn select_mode(deep: bool, mask: bool) -> RedactionMode {
    let endpoint = if deep { Endpoint::Deep } else { Endpoint::Fast };
    let style = if mask { RedactionStyle::Mask } else { RedactionStyle::Label };
    RedactionMode::new(endpoint, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_select_mode() {
        let cli = Cli::try_parse_from(["piifw", "redact", "--deep", "--mask"]).unwrap();
        let Commands::Redact(cmd) = cli.command else { panic!("expected redact") };
        assert_eq!(cmd.mode(), RedactionMode::DeepMasked);

        let cli = Cli::try_parse_from(["piifw", "scan"]).unwrap();
        let Commands::Scan(cmd) = cli.command else { panic!("expected scan") };
        assert_eq!(cmd.mode(), RedactionMode::Fast);
    }

    #[test]
    fn zero_timeout_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["piifw", "--timeout", "0", "scan"]).is_err());
    }

    #[test]
    fn diff_and_json_conflict() {
        assert!(Cli::try_parse_from(["piifw", "redact", "--diff", "--json"]).is_err());
    }
}
