//! Logging setup for the `piifw` binary.
//!
//! Library code logs through the `log` facade; this module wires it to
//! `env_logger` on stderr so stdout stays reserved for redacted output.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises the global logger.
///
/// `RUST_LOG` is honoured unless `level` is given, in which case it wins.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}

/// Maps the global verbosity flags to an explicit level, if any.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true, false), Some(LevelFilter::Off));
    }

    #[test]
    fn disable_debug_caps_at_info() {
        assert_eq!(level_from_flags(false, true, true), Some(LevelFilter::Info));
    }

    #[test]
    fn no_flags_defers_to_environment() {
        assert_eq!(level_from_flags(false, false, false), None);
        assert_eq!(level_from_flags(false, true, false), Some(LevelFilter::Debug));
    }
}
