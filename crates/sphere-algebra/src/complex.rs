// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Complex division with a saturating zero-denominator policy.
//!
//! Addition and multiplication are the plain [`num_complex`] operators; the
//! one rule this module owns is what happens when a denominator collapses.
//! Instead of letting the quotient run off toward infinity or NaN, division
//! below the guard window returns the zero complex number. Möbius application
//! inherits this policy, which is how singular transforms and pole-adjacent
//! arguments degenerate quietly instead of poisoning downstream geometry.

use num_complex::Complex64;

/// Squared-magnitude window under which a denominator counts as zero.
pub const DIV_GUARD_NORM_SQR: f64 = 1e-4;

/// Divide `num` by `den`, saturating to `0 + 0i` when `|den|²` falls inside
/// [`DIV_GUARD_NORM_SQR`].
///
/// The operation is total. Callers must not rely on division signalling a
/// singular denominator; the saturated zero is the defined result.
#[inline]
pub fn div_saturating(num: Complex64, den: Complex64) -> Complex64 {
    if den.norm_sqr() < DIV_GUARD_NORM_SQR {
        return Complex64::new(0.0, 0.0);
    }
    num / den
}
