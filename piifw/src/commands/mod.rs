//! Command dispatch and the helpers shared by every subcommand.

pub mod redact;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use piifw_core::{Client, ClientConfig, PiiFirewallError, RedactionService};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use crate::cli::{Cli, Commands};
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Exit status when the failure is worth retrying (`EX_TEMPFAIL`).
pub const EXIT_RETRYABLE: u8 = 75;
/// Exit status when `scan --fail-over-threshold` is exceeded.
pub const EXIT_THRESHOLD_EXCEEDED: u8 = 2;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

/// Combines the configuration file (if any) with command-line and environment values.
pub fn resolve_client_config(cli: &Cli) -> Result<ClientConfig> {
    let base = match &cli.config {
        Some(path) => ClientConfig::load_from_file(path)?,
        None => ClientConfig::default(),
    };
    let config = base.merge(cli.client_overrides());
    debug!("Resolved client configuration: {:?}", config);
    Ok(config)
}

/// Runs the selected subcommand and returns the process exit code.
pub fn run(cli: &Cli, theme: &ThemeMap) -> Result<ExitCode> {
    let config = resolve_client_config(cli)?;
    let client = Client::from_config(&config)?;
    run_with_service(cli, &client, theme)
}

/// Runs the selected subcommand against any redaction backend.
pub fn run_with_service(
    cli: &Cli,
    service: &dyn RedactionService,
    theme: &ThemeMap,
) -> Result<ExitCode> {
    debug!("Using redaction service at {}", service.describe());
    match &cli.command {
        Commands::Redact(cmd) => {
            let opts = redact::RedactOptions {
                input: read_input(cmd.input_file.as_deref())?,
                mode: cmd.mode(),
                output_path: cmd.output.clone(),
                diff: cmd.diff,
                json: cmd.json,
                no_redaction_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            redact::run_redact_opts(service, opts, theme)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Scan(cmd) => {
            let opts = scan::ScanOptions {
                input: read_input(cmd.input_file.as_deref())?,
                mode: cmd.mode(),
                fail_over_threshold: cmd.fail_over_threshold,
                json_stdout: cmd.json_stdout,
                quiet: cli.quiet,
            };
            let outcome = scan::run_scan_opts(service, opts, theme)?;
            if outcome.threshold_exceeded {
                Ok(ExitCode::from(EXIT_THRESHOLD_EXCEEDED))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Chooses the exit status for a failed run.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PiiFirewallError>() {
        Some(api_err) if api_err.is_retryable() => EXIT_RETRYABLE,
        _ => 1,
    }
}

/// Prints a failed run to stderr, with a hint when a retry may help.
pub fn report_error(err: &anyhow::Error, theme: &ThemeMap) {
    error_msg(format!("{:#}", err), theme);
    if let Some(api_err) = err.downcast_ref::<PiiFirewallError>() {
        if api_err.is_retryable() {
            info_msg("This failure is transient; retry after a short delay.", theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn retryable_errors_map_to_tempfail() {
        let err = anyhow::Error::new(PiiFirewallError::Timeout);
        assert_eq!(exit_code_for(&err), EXIT_RETRYABLE);

        let err = anyhow::Error::new(piifw_core::classify_http_error(429, "slow down"))
            .context("Redaction failed");
        assert_eq!(exit_code_for(&err), EXIT_RETRYABLE);
    }

    #[test]
    fn other_errors_map_to_one() {
        let err = anyhow::Error::new(piifw_core::classify_http_error(401, "nope"));
        assert_eq!(exit_code_for(&err), 1);
        assert_eq!(exit_code_for(&anyhow!("disk full")), 1);
    }

    #[test]
    fn read_input_reports_missing_file() {
        let err = read_input(Some(Path::new("/no/such/input.txt"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/input.txt"));
    }
}
