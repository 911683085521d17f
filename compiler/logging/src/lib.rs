#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the generator.
//!
//! The generator crates log through `tracing`. This crate installs the
//! subscriber: compact lines on stderr, tagged with level and target. Inside
//! a build script that output is kept by Cargo and shown when the build fails.
//!
//! `CORRELATION_LOG` takes `EnvFilter` directives (`debug`,
//! `correlation_analysis=trace`) and wins over the configured level.

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable read by [`make_filter`].
pub const LOG_ENV: &str = "CORRELATION_LOG";

/// Level used when neither the environment nor the config names a valid one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Parse a config level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(level: &str) -> Option<LevelFilter> { level.trim().parse().ok() }

/// Directives from `CORRELATION_LOG`, or `default` when it is unset or empty.
///
/// Directives that do not parse are skipped.
pub fn make_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the stderr subscriber. Only the first call per process has an effect.
///
/// An unknown `level` falls back to [`DEFAULT_LEVEL`] with a warning.
pub fn init(level: &str) {
    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let parsed = parse_level(level);
        let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let subscriber = fmt::fmt()
            .with_env_filter(make_filter(parsed.unwrap_or(DEFAULT_LEVEL)))
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .without_time()
            .compact()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);

        if parsed.is_none() {
            tracing::warn!("unknown log level `{}`; using {}", level, DEFAULT_LEVEL);
        }
    });
}
