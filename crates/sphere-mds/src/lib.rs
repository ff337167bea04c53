// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Classical (Torgerson) multidimensional scaling.
//!
//! An `n × n` dissimilarity matrix is embedded into three Euclidean display
//! dimensions: square the distances, double-center into a Gram matrix,
//! eigendecompose, and read coordinates off the top three eigenpairs. A
//! separate normalisation step maps the resulting cloud into the unit box
//! without distorting its aspect ratio.
//!
//! The numeric path is total. Degenerate inputs – the zero matrix, duplicate
//! rows, `n` of 0 or 1, non-Euclidean dissimilarities with negative Gram
//! eigenvalues – all produce finite, well-defined coordinates. The only error
//! is a flat-buffer length that cannot be an `n × n` matrix.

pub mod embed;

pub use embed::{
    embed_distances, normalize_to_unit_box, EmbedError, EmbedResult, EmbeddingPoint,
};
