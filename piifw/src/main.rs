// piifw/src/main.rs
//! piifw entry point.
//!
//! Loads `.env`, parses arguments, sets up logging and hands off to the
//! selected command.

use clap::Parser;
use piifw::cli::Cli;
use piifw::logger;
use piifw::ui::theme::{build_theme_map, ThemeStyle};
use piifw::{exit_code_for, report_error, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            report_error(&e, &fallback);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &theme_map) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, &theme_map);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
