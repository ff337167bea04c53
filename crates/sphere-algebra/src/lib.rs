// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Pure geometry of the Riemann sphere and the three-valued logic it hosts.
//!
//! Everything in this crate is a total function over well-typed numeric input:
//! degenerate arguments (singular denominators, the projection pole) are
//! resolved through fixed saturation fallbacks rather than errors, so callers
//! never see a panic, an `Err`, or a NaN from this layer.

pub mod complex;
pub mod logic;
pub mod mobius;
pub mod projection;

pub use complex::{div_saturating, DIV_GUARD_NORM_SQR};
pub use logic::{transform_truth_positions, TruthValue};
pub use mobius::{MobiusTransform, NamedTransform};
pub use projection::{
    inverse_stereographic, stereographic_project, SpherePoint, NORTH_POLE_TOL,
};
