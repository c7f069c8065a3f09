//! Logger setup for the command-line binary.

use std::io::Write;

use env_logger::{Builder, Target, WriteStyle};
use log::{Level, LevelFilter};

use crate::error::{Result, TourError};

/// Installs a compact stderr logger (`LEVEL message`) at `level`.
pub fn init_logger(level: LevelFilter) -> Result<()> {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", level_tag(record.level()), record.args()))
        .try_init()
        .map_err(|e| TourError::other(format!("logger init failed: {e}")))
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`),
/// case-insensitively.
pub fn parse_level(raw: &str) -> Result<LevelFilter> {
    raw.parse::<LevelFilter>()
        .map_err(|_| TourError::invalid_input(format!("unknown log level {raw:?}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
