// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finite 3D line segments.
//!
//! Side lines and center lines of bars are segments; the joint engine builds
//! its closest-point queries on top of this type.

use nalgebra::{Point3, Vector3};

/// A finite line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

impl Segment {
    /// Creates a segment from start to end.
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    /// Vector from start to end.
    pub fn delta(&self) -> Vector3<f64> {
        self.end - self.start
    }

    /// Unit direction from start to end.
    pub fn direction(&self) -> Vector3<f64> {
        self.delta().normalize()
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// Point at parameter `t` along the segment (`t` is not clamped).
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.start + self.delta() * t
    }

    /// Closest point on the segment to `point`, clamped to the segment ends.
    pub fn closest_point_to(&self, point: &Point3<f64>) -> Point3<f64> {
        let ba = self.delta();
        let t = (point - self.start).dot(&ba) / ba.norm_squared();
        self.point_at(t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_at_interpolates() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(seg.point_at(0.5), Point3::new(5.0, 0.0, 0.0));
        assert_relative_eq!(seg.length(), 10.0);
    }

    #[test]
    fn closest_point_projects_onto_interior() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let p = seg.closest_point_to(&Point3::new(4.0, 3.0, 0.0));
        assert_relative_eq!(p, Point3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn closest_point_clamps_to_ends() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let before = seg.closest_point_to(&Point3::new(-5.0, 1.0, 0.0));
        let after = seg.closest_point_to(&Point3::new(15.0, 1.0, 0.0));
        assert_relative_eq!(before, Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(after, Point3::new(10.0, 0.0, 0.0));
    }
}
