// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Möbius transformations `z ↦ (az + b) / (cz + d)` and their action on the
//! sphere via the stereographic charts.
//!
//! A transform is mathematically invertible only when `ad − bc ≠ 0`. That is
//! deliberately not validated here: a singular transform degenerates through
//! the saturating divide the same way a pole-adjacent denominator does, so
//! `apply` stays total.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::complex::div_saturating;
use crate::projection::{inverse_stereographic, stereographic_project, SpherePoint};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

/// Fractional-linear transform represented by the matrix `[[a, b], [c, d]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MobiusTransform {
    pub a: Complex64,
    pub b: Complex64,
    pub c: Complex64,
    pub d: Complex64,
}

impl MobiusTransform {
    /// The identity map `z ↦ z`.
    pub const IDENTITY: MobiusTransform = MobiusTransform::new(ONE, ZERO, ZERO, ONE);

    /// The inversion `z ↦ 1/z`.
    pub const INVERSION: MobiusTransform = MobiusTransform::new(ZERO, ONE, ONE, ZERO);

    /// The quarter-rotation entry of the canonical table, `a = d = i`.
    pub const ROTATE_QUARTER: MobiusTransform = MobiusTransform::new(I, ZERO, ZERO, I);

    /// The scaling `z ↦ 2z`.
    pub const SCALE_DOUBLE: MobiusTransform =
        MobiusTransform::new(Complex64::new(2.0, 0.0), ZERO, ZERO, ONE);

    pub const fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { a, b, c, d }
    }

    /// `ad − bc`. Informational; zero means the transform is singular and
    /// every application saturates.
    pub fn determinant(&self) -> Complex64 {
        self.a * self.d - self.b * self.c
    }

    /// Evaluate `(az + b) / (cz + d)` through the saturating divide.
    pub fn apply(&self, z: Complex64) -> Complex64 {
        div_saturating(self.a * z + self.b, self.c * z + self.d)
    }

    /// Carry a sphere point through the plane: project, transform, lift back.
    ///
    /// This is the entry point used for visualising truth-value positions
    /// under a transform.
    pub fn apply_to_sphere_point(&self, point: SpherePoint) -> SpherePoint {
        inverse_stereographic(self.apply(stereographic_project(point)))
    }

    /// Matrix composition: `self.compose(other)` applies `other` first.
    pub fn compose(&self, other: &MobiusTransform) -> MobiusTransform {
        MobiusTransform::new(
            self.a * other.a + self.b * other.c,
            self.a * other.b + self.b * other.d,
            self.c * other.a + self.d * other.c,
            self.c * other.b + self.d * other.d,
        )
    }
}

/// Canonical table of named transforms presented by consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedTransform {
    Identity,
    Inversion,
    RotateQuarter,
    ScaleDouble,
}

impl NamedTransform {
    pub const ALL: [NamedTransform; 4] = [
        NamedTransform::Identity,
        NamedTransform::Inversion,
        NamedTransform::RotateQuarter,
        NamedTransform::ScaleDouble,
    ];

    /// The fixed matrix for this table entry.
    pub fn transform(self) -> MobiusTransform {
        match self {
            NamedTransform::Identity => MobiusTransform::IDENTITY,
            NamedTransform::Inversion => MobiusTransform::INVERSION,
            NamedTransform::RotateQuarter => MobiusTransform::ROTATE_QUARTER,
            NamedTransform::ScaleDouble => MobiusTransform::SCALE_DOUBLE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NamedTransform::Identity => "identity",
            NamedTransform::Inversion => "inversion",
            NamedTransform::RotateQuarter => "rotate-90",
            NamedTransform::ScaleDouble => "scale-2x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: SpherePoint, b: SpherePoint, tol: f64) {
        assert!(
            a.distance_to(&b) < tol,
            "points differ: {a:?} vs {b:?} (tol {tol})"
        );
    }

    #[test]
    fn identity_is_a_sphere_no_op() {
        let samples = [
            SpherePoint::SOUTH_POLE,
            SpherePoint::new(1.0, 0.0, 0.0),
            SpherePoint::new(0.6, 0.48, 0.64),
            SpherePoint::new(-0.36, 0.48, 0.8),
        ];
        for p in samples {
            let image = MobiusTransform::IDENTITY.apply_to_sphere_point(p);
            assert_close(image, p, 1e-9);
        }
    }

    #[test]
    fn inversion_twice_is_identity_away_from_poles() {
        let samples = [
            SpherePoint::new(1.0, 0.0, 0.0),
            SpherePoint::new(0.0, 1.0, 0.0),
            SpherePoint::new(0.6, -0.48, 0.64),
        ];
        for p in samples {
            let once = MobiusTransform::INVERSION.apply_to_sphere_point(p);
            let twice = MobiusTransform::INVERSION.apply_to_sphere_point(once);
            assert_close(twice, p, 1e-6);
        }
    }

    #[test]
    fn inversion_on_the_plane() {
        let z = Complex64::new(2.0, 0.0);
        let w = MobiusTransform::INVERSION.apply(z);
        assert!((w - Complex64::new(0.5, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn singular_transform_saturates_instead_of_failing() {
        // ad − bc = 0: every column proportional, denominator cancels to the
        // guard window for z = -1.
        let singular = MobiusTransform::new(ONE, ONE, ONE, ONE);
        assert!(singular.determinant().norm() < 1e-12);
        let w = singular.apply(Complex64::new(-1.0, 0.0));
        assert_eq!(w, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn scaling_doubles_the_plane_image() {
        let z = Complex64::new(0.25, -1.5);
        let w = MobiusTransform::SCALE_DOUBLE.apply(z);
        assert!((w - z * Complex64::new(2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn composition_matches_sequential_application() {
        let first = MobiusTransform::SCALE_DOUBLE;
        let second = MobiusTransform::INVERSION;
        let composed = second.compose(&first);
        let z = Complex64::new(0.8, 0.3);
        let sequential = second.apply(first.apply(z));
        let direct = composed.apply(z);
        assert!((sequential - direct).norm() < 1e-9);
    }

    #[test]
    fn named_table_is_fixed() {
        assert_eq!(
            NamedTransform::Identity.transform(),
            MobiusTransform::IDENTITY
        );
        assert_eq!(
            NamedTransform::RotateQuarter.transform().a,
            Complex64::new(0.0, 1.0)
        );
        assert_eq!(NamedTransform::ALL.len(), 4);
    }
}
