// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Ambient configuration shared by the SpectralSphere crates.
//!
//! Configuration is environment-driven; there are no config files. Two knobs
//! exist: where the engine module asset lives (`SPHERE_ENGINE_MODULE`) and
//! whether a chrome trace is written alongside the fmt logs
//! (`SPHERE_TRACE_CHROME`, see [`tracing`]).

pub mod tracing;

pub use crate::tracing::{init_tracing, InitError, TracingGuard};

/// Default asset path for the spectral engine module.
pub const DEFAULT_ENGINE_MODULE: &str = "modules/spectral_engine.wasm";

/// Resolve the engine module asset path.
///
/// `SPHERE_ENGINE_MODULE` overrides; otherwise [`DEFAULT_ENGINE_MODULE`].
/// An empty or whitespace-only override falls back to the default.
pub fn engine_module_path() -> String {
    match std::env::var("SPHERE_ENGINE_MODULE") {
        Ok(raw) if !raw.trim().is_empty() => raw,
        _ => DEFAULT_ENGINE_MODULE.to_string(),
    }
}
