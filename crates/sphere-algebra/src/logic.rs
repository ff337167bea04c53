// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Strong-Kleene three-valued logic and its embedding on the sphere.
//!
//! The three truth values sit at fixed positions: false at the south pole,
//! true at the north pole, undefined on the equator at `(1, 0, 0)`. Möbius
//! transforms act on those positions through the stereographic charts, which
//! is how a transform's geometry is visualised against the logic it carries.

use serde::{Deserialize, Serialize};

use crate::mobius::MobiusTransform;
use crate::projection::SpherePoint;

/// Truth value of the three-valued logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruthValue {
    False,
    True,
    Undefined,
}

impl TruthValue {
    /// All values in canonical order: false, true, undefined.
    pub const ALL: [TruthValue; 3] = [TruthValue::False, TruthValue::True, TruthValue::Undefined];

    /// Fixed position of this value on the unit sphere.
    pub const fn position(self) -> SpherePoint {
        match self {
            TruthValue::False => SpherePoint::SOUTH_POLE,
            TruthValue::True => SpherePoint::NORTH_POLE,
            TruthValue::Undefined => SpherePoint::new(1.0, 0.0, 0.0),
        }
    }

    /// Strong-Kleene negation. Undefined is its own negation.
    pub const fn negate(self) -> TruthValue {
        match self {
            TruthValue::False => TruthValue::True,
            TruthValue::True => TruthValue::False,
            TruthValue::Undefined => TruthValue::Undefined,
        }
    }

    /// Strong-Kleene conjunction: false absorbs, true is neutral.
    pub const fn conjunction(self, other: TruthValue) -> TruthValue {
        match (self, other) {
            (TruthValue::False, _) | (_, TruthValue::False) => TruthValue::False,
            (TruthValue::True, rhs) => rhs,
            (lhs, TruthValue::True) => lhs,
            _ => TruthValue::Undefined,
        }
    }

    /// Strong-Kleene disjunction: true absorbs, false is neutral.
    pub const fn disjunction(self, other: TruthValue) -> TruthValue {
        match (self, other) {
            (TruthValue::True, _) | (_, TruthValue::True) => TruthValue::True,
            (TruthValue::False, rhs) => rhs,
            (lhs, TruthValue::False) => lhs,
            _ => TruthValue::Undefined,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TruthValue::False => "0",
            TruthValue::True => "1",
            TruthValue::Undefined => "undefined",
        }
    }
}

/// Map all three truth-value positions through `transform`, in
/// [`TruthValue::ALL`] order.
pub fn transform_truth_positions(transform: &MobiusTransform) -> [SpherePoint; 3] {
    let mut images = [SpherePoint::new(0.0, 0.0, 0.0); 3];
    for (slot, value) in images.iter_mut().zip(TruthValue::ALL) {
        *slot = transform.apply_to_sphere_point(value.position());
    }
    images
}
