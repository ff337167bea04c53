// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Shared result shapes produced by the engine and consumed downstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conditioning diagnostics attached to one spectral-triple computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditioningReport {
    /// Gap between the top two eigenvalues of the regularised operator.
    pub spectral_gap: f64,
    /// Regulariser the computation ran with.
    pub epsilon: f64,
    /// Largest commutator norm observed while evaluating distances.
    pub max_commutator_norm: f64,
    /// Engine's own verdict on whether the triple is trustworthy.
    pub ill_conditioned: bool,
}

/// Immutable snapshot of one successful engine computation.
///
/// Matrices are flattened row-major with `n × n` entries; `stationary` holds
/// the stationary distribution π and `eigenvalues` the Dirac spectrum. A
/// snapshot is created once per distinct input fingerprint and replaced
/// wholesale – never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectralTripleResult {
    pub n: usize,
    pub stationary: Vec<f64>,
    pub eigenvalues: Vec<f64>,
    pub dirac: Vec<f64>,
    pub distances: Vec<f64>,
    pub conditioning: ConditioningReport,
}

/// A sequence in an engine result whose length contradicts `n`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("engine returned a malformed '{field}' (expected {expected} entries, got {got})")]
pub struct ShapeViolation {
    pub field: &'static str,
    pub expected: usize,
    pub got: usize,
}

impl SpectralTripleResult {
    /// Check every sequence length against `n`.
    ///
    /// The engine is untrusted at this boundary; a violation is reported so
    /// the gateway can surface it as a failed computation instead of letting
    /// a short buffer panic an indexing consumer later.
    pub fn validate_shape(&self) -> Result<(), ShapeViolation> {
        let square = self.n * self.n;
        let checks = [
            ("stationary", self.stationary.len(), self.n),
            ("eigenvalues", self.eigenvalues.len(), self.n),
            ("dirac", self.dirac.len(), square),
            ("distances", self.distances.len(), square),
        ];
        for (field, got, expected) in checks {
            if got != expected {
                return Err(ShapeViolation {
                    field,
                    expected,
                    got,
                });
            }
        }
        Ok(())
    }

    /// Flattened row-major Connes distance matrix, as the embedding consumer
    /// expects it.
    pub fn distances_matrix(&self) -> &[f64] {
        &self.distances
    }

    /// Connes distance between states `i` and `j`, if both are in range.
    pub fn distance_between(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n || j >= self.n {
            return None;
        }
        self.distances.get(i * self.n + j).copied()
    }
}
