//! `scan` command: reports detections without printing redacted text.

use anyhow::{Context, Result};
use log::info;
use piifw_core::{RedactionMode, RedactionService};
use serde::Serialize;
use std::io::{self, Write};

use crate::commands::{info_msg, warn_msg};
use crate::ui::theme::ThemeMap;

pub struct ScanOptions {
    pub input: String,
    pub mode: RedactionMode,
    pub fail_over_threshold: Option<u64>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Summary printed by `scan`, also used for `--json-stdout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub mode: String,
    pub detections: u64,
    pub has_pii: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub summary: ScanSummary,
    pub threshold_exceeded: bool,
}

pub fn run_scan_opts(
    service: &dyn RedactionService,
    opts: ScanOptions,
    theme_map: &ThemeMap,
) -> Result<ScanOutcome> {
    info!("Starting {} scan.", opts.mode);

    let result = service
        .redact(&opts.input, opts.mode)
        .context("Scan failed")?;

    let summary = ScanSummary {
        mode: opts.mode.to_string(),
        detections: result.detections(),
        has_pii: result.has_pii(),
        warning: result.warning().map(str::to_string),
    };
    let threshold_exceeded = opts
        .fail_over_threshold
        .is_some_and(|limit| summary.detections > limit);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_summary(&summary, opts.json_stdout, &mut writer)?;

    if !opts.quiet {
        if let Some(warning) = &summary.warning {
            warn_msg(warning, theme_map);
        }
        if let (true, Some(limit)) = (threshold_exceeded, opts.fail_over_threshold) {
            info_msg(
                format!("Detections ({}) exceed the threshold of {}.", summary.detections, limit),
                theme_map,
            );
        }
    }

    Ok(ScanOutcome {
        summary,
        threshold_exceeded,
    })
}

pub fn write_summary<W: Write>(summary: &ScanSummary, json: bool, writer: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *writer, summary)
            .context("Failed to serialize scan summary")?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "Mode: {}", summary.mode)?;
        writeln!(writer, "Detections: {}", summary.detections)?;
        writeln!(writer, "Contains PII: {}", if summary.has_pii { "yes" } else { "no" })?;
    }
    Ok(())
}
