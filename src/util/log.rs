// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! File based logging.
//!
//! The terminal belongs to the TUI, so log output goes to a file next to the
//! configuration file instead of stdout. Set `RUST_LOG` to adjust the filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "bandtracker.log";

/// Installs the global subscriber when a log directory is available.
///
/// Logging is best effort: a failure is reported on stderr, before the
/// terminal switches to the alternate screen, and the application runs
/// without a subscriber.
pub(crate) fn start_logging(dir: Option<&Path>) -> Option<WorkerGuard> {
    let dir = dir?;

    init_logging(dir)
        .map_err(|err| eprintln!("Logging disabled: {err:#}"))
        .ok()
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped and must be
/// kept alive for as long as the application runs.
pub(crate) fn init_logging(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
