//! `redact` command: sends input to the API and writes the redacted text.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use piifw_core::{RedactionMode, RedactionResult, RedactionService};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::commands::{info_msg, success_msg, warn_msg};
use crate::ui::diff_viewer;
use crate::ui::theme::ThemeMap;

/// Options for the ergonomic run_redact_opts API
pub struct RedactOptions {
    pub input: String,
    pub mode: RedactionMode,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub json: bool,
    pub no_redaction_summary: bool,
    pub quiet: bool,
}

/// JSON shape written by `redact --json`.
#[derive(Debug, Serialize)]
pub struct RedactionReport<'a> {
    pub mode: String,
    pub redacted: &'a str,
    pub detections: u64,
    pub has_pii: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'a str>,
}

impl<'a> RedactionReport<'a> {
    pub fn new(mode: RedactionMode, result: &'a RedactionResult) -> Self {
        RedactionReport {
            mode: mode.to_string(),
            redacted: result.redacted(),
            detections: result.detections(),
            has_pii: result.has_pii(),
            warning: result.warning(),
        }
    }
}

/// The main operation runner for `piifw redact`.
pub fn run_redact_opts(
    service: &dyn RedactionService,
    opts: RedactOptions,
    theme_map: &ThemeMap,
) -> Result<RedactionResult> {
    info!("Starting {} redaction.", opts.mode);

    let result = service
        .redact(&opts.input, opts.mode)
        .context("Redaction failed")?;

    debug!(
        "Content redacted. Original length: {}, Redacted length: {}",
        opts.input.len(),
        result.redacted().len()
    );

    handle_primary_output(&opts, &result, theme_map)?;
    handle_redaction_summary(&opts, &result, theme_map);

    info!("Redaction completed.");
    Ok(result)
}

fn handle_primary_output(
    opts: &RedactOptions,
    result: &RedactionResult,
    theme_map: &ThemeMap,
) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing redacted content to file: {}", path.display()), theme_map);
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write_result(opts, result, &mut file, theme_map, false, false)?;
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        write_result(opts, result, &mut writer, theme_map, supports_color, true)?;
    }
    Ok(())
}

fn write_result<W: Write>(
    opts: &RedactOptions,
    result: &RedactionResult,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
    terminate_line: bool,
) -> Result<()> {
    if opts.json {
        let report = RedactionReport::new(opts.mode, result);
        serde_json::to_writer_pretty(&mut *writer, &report)
            .context("Failed to serialize redaction result")?;
        writeln!(writer)?;
    } else if opts.diff {
        diff_viewer::print_diff(&opts.input, result.redacted(), writer, theme_map, supports_color)?;
    } else {
        let redacted = result.redacted();
        writer.write_all(redacted.as_bytes())?;
        // Files get the text byte for byte; stdout only gains a final newline.
        if terminate_line && !redacted.is_empty() && !redacted.ends_with('\n') {
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn handle_redaction_summary(opts: &RedactOptions, result: &RedactionResult, theme_map: &ThemeMap) {
    if opts.quiet {
        return;
    }
    if let Some(warning) = result.warning() {
        warn_msg(warning, theme_map);
    }
    if opts.no_redaction_summary {
        return;
    }
    if result.has_pii() {
        success_msg(
            format!("{} PII item(s) redacted ({} mode).", result.detections(), opts.mode),
            theme_map,
        );
    } else {
        info_msg(format!("No PII detected ({} mode).", opts.mode), theme_map);
    }
}
