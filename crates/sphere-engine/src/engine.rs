// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Contract of the external computation engine.

use async_trait::async_trait;
use thiserror::Error;

use crate::result::SpectralTripleResult;

/// Fault raised by the engine for a given input (singular matrix, internal
/// numeric failure). Opaque to this core; carried as a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineFault {
    pub message: String,
}

impl EngineFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The external spectral-triple engine.
///
/// One operation: given a transition matrix flattened row-major (`n × n`
/// entries) and the regulariser `ε`, produce the spectral triple. The
/// numerical method behind it is out of scope here; implementations are
/// loaded modules or test doubles. Any fault is surfaced by the gateway as a
/// failed computation.
#[async_trait]
pub trait SpectralEngine: Send + Sync {
    async fn compute_spectral_triple(
        &self,
        matrix: &[f64],
        n: usize,
        epsilon: f64,
    ) -> Result<SpectralTripleResult, EngineFault>;
}
