// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Torgerson scaling and unit-box normalisation.

use std::cmp::Ordering;

use nalgebra::{DMatrix, SymmetricEigen};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for the embedding entry points.
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Errors emitted by the embedding entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The flat distance buffer cannot be an `n × n` matrix.
    #[error("distance data length mismatch: expected {expected} entries for n={n}, got {got}")]
    DataLength {
        n: usize,
        expected: usize,
        got: usize,
    },
}

/// Point in normalised display space. No sphere constraint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EmbeddingPoint {
    pub const ORIGIN: EmbeddingPoint = EmbeddingPoint::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`; reconstruction tests compare these
    /// rather than raw coordinates, since eigenvector orientation is free.
    pub fn distance_to(&self, other: &EmbeddingPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for EmbeddingPoint {
    fn from(coords: [f64; 3]) -> Self {
        EmbeddingPoint::new(coords[0], coords[1], coords[2])
    }
}

/// Embed the flattened row-major `n × n` distance matrix into 3-D.
///
/// Steps: square the entries, double-center (`B = −½·J·D²·J`, computed via
/// row/column/grand means), symmetrise the Gram matrix against asymmetric
/// input noise, eigendecompose, and scale the top three eigenvectors by
/// `√λ`. Negative eigenvalues – the signature of non-Euclidean
/// dissimilarities – contribute a zero axis instead of a square root of a
/// negative number, and axes beyond `n` are zero-filled.
///
/// Non-finite entries are rewritten to zero on ingestion so no NaN can reach
/// the factorisation. Coordinates are deterministic given the input, up to
/// the sign and ordering freedom of eigenvectors with near-tied eigenvalues.
pub fn embed_distances(flat: &[f64], n: usize) -> EmbedResult<Vec<EmbeddingPoint>> {
    let expected = n * n;
    if flat.len() != expected {
        return Err(EmbedError::DataLength {
            n,
            expected,
            got: flat.len(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut squared = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let d = flat[i * n + j];
            let d = if d.is_finite() { d } else { 0.0 };
            squared[(i, j)] = d * d;
        }
    }

    let inv_n = 1.0 / n as f64;
    let mut row_mean = vec![0.0f64; n];
    let mut col_mean = vec![0.0f64; n];
    let mut grand_mean = 0.0f64;
    for i in 0..n {
        for j in 0..n {
            let v = squared[(i, j)];
            row_mean[i] += v;
            col_mean[j] += v;
            grand_mean += v;
        }
    }
    for mean in row_mean.iter_mut().chain(col_mean.iter_mut()) {
        *mean *= inv_n;
    }
    grand_mean *= inv_n * inv_n;

    let mut gram = DMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            gram[(i, j)] =
                -0.5 * (squared[(i, j)] - row_mean[i] - col_mean[j] + grand_mean);
        }
    }
    // The factorisation assumes exact symmetry; average out whatever the
    // input's asymmetry left behind.
    for i in 0..n {
        for j in (i + 1)..n {
            let mean = 0.5 * (gram[(i, j)] + gram[(j, i)]);
            gram[(i, j)] = mean;
            gram[(j, i)] = mean;
        }
    }

    let SymmetricEigen {
        eigenvalues,
        eigenvectors,
    } = SymmetricEigen::new(gram);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&lhs, &rhs| {
        eigenvalues[rhs]
            .partial_cmp(&eigenvalues[lhs])
            .unwrap_or(Ordering::Equal)
    });

    let mut coords = vec![[0.0f64; 3]; n];
    for (axis, &pair) in order.iter().take(3).enumerate() {
        let lambda = eigenvalues[pair];
        if lambda <= 0.0 {
            continue;
        }
        let scale = lambda.sqrt();
        for (point, coord) in coords.iter_mut().enumerate() {
            coord[axis] = eigenvectors[(point, pair)] * scale;
        }
    }

    Ok(coords.into_iter().map(EmbeddingPoint::from).collect())
}

/// Translate and uniformly scale `points` so the cloud fits the unit box.
///
/// Each axis minimum maps to zero; a single scale – the reciprocal of the
/// largest axis range – is applied to all axes so the cloud's shape is
/// preserved. A coincident cloud (zero range) is translated only.
pub fn normalize_to_unit_box(points: &mut [EmbeddingPoint]) {
    if points.is_empty() {
        return;
    }

    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for point in points.iter() {
        for (axis, value) in [point.x, point.y, point.z].into_iter().enumerate() {
            min[axis] = min[axis].min(value);
            max[axis] = max[axis].max(value);
        }
    }

    let widest = (0..3)
        .map(|axis| max[axis] - min[axis])
        .fold(0.0f64, f64::max);
    let scale = if widest > 0.0 { 1.0 / widest } else { 1.0 };

    for point in points.iter_mut() {
        point.x = (point.x - min[0]) * scale;
        point.y = (point.y - min[1]) * scale;
        point.z = (point.z - min[2]) * scale;
    }
}
