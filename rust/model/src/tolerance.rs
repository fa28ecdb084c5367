// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Length tolerance threaded through every geometric decision.
//!
//! All "is touching / is parallel / is perpendicular" tests compare against
//! one configurable tolerance value instead of scattered module constants, so
//! detection stays deterministic and testable across precisions.

/// Linear tolerance in construction units (millimetres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Two lengths closer than this are considered equal.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance: 1/1000 mm.
    pub const DEFAULT_LINEAR: f64 = 0.001;

    /// Creates a tolerance with the given linear value.
    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// The squared tolerance, for squared-distance comparisons.
    pub fn linear_sq(&self) -> f64 {
        self.linear * self.linear
    }

    /// Returns `true` if `a` and `b` are equal within the linear tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constant() {
        let tol = Tolerance::default();
        assert_eq!(tol.linear, 0.001);
        assert_eq!(tol.linear_sq(), 1e-6);
    }

    #[test]
    fn approx_eq_is_strict_at_the_boundary() {
        let tol = Tolerance::default();
        assert!(tol.approx_eq(1.0, 1.0 + 0.0009));
        assert!(!tol.approx_eq(1.0, 1.0 + 0.001));
    }
}
