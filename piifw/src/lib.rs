// piifw/src/lib.rs
//! # piifw CLI Application
//!
//! This crate provides the terminal interface for the PII Firewall Edge
//! client in `piifw-core`: argument parsing, logging setup, input/output
//! handling and the `redact` and `scan` commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::{exit_code_for, report_error, run};
