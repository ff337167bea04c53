// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Global tracing subscriber setup.
//!
//! The filter comes from the default environment (`RUST_LOG`), falling back
//! to `info`. When `SPHERE_TRACE_CHROME` names a file, a chrome trace layer
//! is stacked on top of the fmt layer and its flush guard is handed back to
//! the caller – drop the [`TracingGuard`] at process exit and the trace file
//! is flushed with it.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Keeps the chrome trace writer alive for the life of the process.
pub struct TracingGuard {
    _chrome: Option<tracing_chrome::FlushGuard>,
}

/// Errors emitted when configuring the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("tracing has already been initialised")]
    AlreadyInitialised,
    #[error("failed to read SPHERE_TRACE_CHROME: {0}")]
    Env(std::env::VarError),
}

/// Configure the global tracing subscriber. Call once, early.
pub fn init_tracing() -> Result<TracingGuard, InitError> {
    INITIALISED
        .set(())
        .map_err(|_| InitError::AlreadyInitialised)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stdout().is_terminal());

    let (chrome_layer, chrome_guard) = match chrome_trace_path()? {
        Some(path) => {
            let (layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(path)
                .include_args(true)
                .build();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(chrome_layer)
        .init();

    Ok(TracingGuard {
        _chrome: chrome_guard,
    })
}

fn chrome_trace_path() -> Result<Option<PathBuf>, InitError> {
    match std::env::var("SPHERE_TRACE_CHROME") {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(PathBuf::from(raw))),
        Ok(_) => Ok(None),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(InitError::Env(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_rejected() {
        // Whichever call runs first wins; the second must report the guard.
        let first = init_tracing();
        let second = init_tracing();
        assert!(first.is_ok() || matches!(first, Err(InitError::AlreadyInitialised)));
        assert!(matches!(second, Err(InitError::AlreadyInitialised)));
    }
}
