// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Error taxonomy of the gateway.
//!
//! Two user-visible failure classes exist. `EngineUnavailable` means the
//! module never became usable – asset missing, an error page served in its
//! place, or an initialisation fault – and is terminal for that load attempt.
//! `ComputationFailed` means the loaded engine rejected one request (or
//! returned a malformed result); it says nothing about the engine's health
//! for subsequent requests. Supersession of a stale request is a policy
//! outcome, not an error, and never appears here.

use thiserror::Error;

use crate::loader::LoadError;

pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The engine module could not be loaded; see the source for which of
    /// the load checks failed.
    #[error("spectral engine unavailable: {0}")]
    EngineUnavailable(#[source] LoadError),

    /// The loaded engine faulted for this request's inputs, or its result
    /// failed shape validation at the boundary.
    #[error("spectral computation failed: {message}")]
    ComputationFailed { message: String },
}

impl GatewayError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GatewayError::EngineUnavailable(_))
    }
}
