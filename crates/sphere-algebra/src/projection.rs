// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Stereographic projection between the unit sphere and the complex plane.
//!
//! Projection runs from the north pole `(0, 0, 1)` onto the equatorial plane:
//! a sphere point `(x, y, z)` maps to `w = (x + iy) / (1 − z)`. The inverse is
//! the closed form `(2·Re w, 2·Im w, |w|² − 1) / (|w|² + 1)`, which is total –
//! as `|w| → ∞` the image tends back to the north pole. The forward map has a
//! single defined fallback: points inside the pole tolerance project to the
//! origin instead of a singularity.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Window around `z = 1` inside which a point counts as the north pole.
pub const NORTH_POLE_TOL: f64 = 1e-3;

/// Point on the unit sphere.
///
/// The unit-norm constraint is a convention of the callers, not an invariant
/// this type enforces; off-sphere coordinates pass through the maps below
/// without complaint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpherePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpherePoint {
    pub const NORTH_POLE: SpherePoint = SpherePoint::new(0.0, 0.0, 1.0);
    pub const SOUTH_POLE: SpherePoint = SpherePoint::new(0.0, 0.0, -1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`, used by callers comparing geometries.
    pub fn distance_to(&self, other: &SpherePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Project `point` from the north pole onto the equatorial plane.
///
/// Points with `z` inside [`NORTH_POLE_TOL`] of 1 – the pole itself, where the
/// projection has no finite image – return the origin as the defined fallback.
pub fn stereographic_project(point: SpherePoint) -> Complex64 {
    if (1.0 - point.z).abs() < NORTH_POLE_TOL {
        return Complex64::new(0.0, 0.0);
    }
    let scale = 1.0 / (1.0 - point.z);
    Complex64::new(point.x * scale, point.y * scale)
}

/// Map a plane point back onto the sphere. Total; no failure mode.
pub fn inverse_stereographic(w: Complex64) -> SpherePoint {
    let s = w.norm_sqr();
    let denom = s + 1.0;
    SpherePoint::new(2.0 * w.re / denom, 2.0 * w.im / denom, (s - 1.0) / denom)
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
    fn south_pole_projects_to_origin() {
        let w = stereographic_project(SpherePoint::SOUTH_POLE);
        assert!(w.norm() < 1e-12);
    }

    #[test]
    fn north_pole_falls_back_to_origin() {
        let w = stereographic_project(SpherePoint::NORTH_POLE);
        assert_eq!(w, Complex64::new(0.0, 0.0));

        // Anything inside the tolerance window shares the fallback.
        let near = stereographic_project(SpherePoint::new(0.01, 0.0, 1.0 - 5e-4));
        assert_eq!(near, Complex64::new(0.0, 0.0));
    }

    #[test]
    fn round_trip_away_from_the_pole() {
        let samples = [
            SpherePoint::SOUTH_POLE,
            SpherePoint::new(1.0, 0.0, 0.0),
            SpherePoint::new(0.0, -1.0, 0.0),
            SpherePoint::new(0.6, 0.48, 0.64),
            SpherePoint::new(-0.36, 0.48, 0.8),
        ];
        for p in samples {
            let back = inverse_stereographic(stereographic_project(p));
            assert_close(back, p, 1e-9);
        }
    }

    #[test]
    fn inverse_is_total_and_tends_to_the_north_pole() {
        let far = inverse_stereographic(Complex64::new(1e9, -1e9));
        assert!(far.x.is_finite() && far.y.is_finite() && far.z.is_finite());
        assert!((far.z - 1.0).abs() < 1e-9);

        let origin = inverse_stereographic(Complex64::new(0.0, 0.0));
        assert_close(origin, SpherePoint::SOUTH_POLE, 1e-12);
    }

    #[test]
    fn inverse_lands_on_the_unit_sphere() {
        for w in [
            Complex64::new(0.3, -0.7),
            Complex64::new(2.0, 5.0),
            Complex64::new(-11.0, 0.25),
        ] {
            let p = inverse_stereographic(w);
            let norm = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "norm={norm}");
        }
    }
}
