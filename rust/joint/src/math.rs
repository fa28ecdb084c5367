// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closest-point queries between side-line segments.
//!
//! This is NOT a general segment-segment solver. The plane-projection step
//! assumes the two segments are near-perpendicular or near-parallel, which
//! the normal-opposition pre-filter in the overlap detector guarantees. For
//! that bar geometry the alternating clamp is exact; for arbitrary skew
//! segments it is only an approximation.

use nalgebra::{Point3, Vector3};
use stabwerk_model::Segment;

/// Sum of per-component absolute differences between two directions.
pub fn manhattan_distance(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a - b).abs().sum()
}

/// Closest point on segment `seg` to the infinite line through `line`.
///
/// Both endpoints of `seg` are projected onto the plane perpendicular to the
/// line's axis through its start; the parameter closest to the line within
/// that plane is then clamped back onto `seg`.
pub fn closest_on_segment_to_line(seg: &Segment, line: &Segment) -> Point3<f64> {
    let axis = line.direction();

    let project = |p: &Point3<f64>| -> Point3<f64> {
        let v = p - line.start;
        line.start + (v - axis * v.dot(&axis))
    };

    let in_plane_a = project(&seg.start);
    let in_plane_b = project(&seg.end);

    let in_plane_ba = in_plane_b - in_plane_a;
    let t = (line.start - in_plane_a).dot(&in_plane_ba) / in_plane_ba.norm_squared();

    // For parallel segments the in-plane direction degenerates and t becomes
    // NaN; the clamp keeps it NaN and callers reject the pair on comparison.
    seg.point_at(t.clamp(0.0, 1.0))
}

/// Closest points between two finite segments, as `(on_ab, on_cd)`.
///
/// Two-step alternating clamp: find the ray point on AB closest to CD's
/// line, clamp it onto CD, then clamp that result back onto AB.
pub fn closest_points_between_segments(ab: &Segment, cd: &Segment) -> (Point3<f64>, Point3<f64>) {
    let ray_point = closest_on_segment_to_line(ab, cd);
    let point_cd = cd.closest_point_to(&ray_point);
    let point_ab = ab.closest_point_to(&point_cd);

    (point_ab, point_cd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn manhattan_distance_sums_components() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(manhattan_distance(&a, &b), 2.0);
    }

    #[test]
    fn crossing_perpendicular_segments_touch() {
        // AB along x at y=0, CD along y crossing at x=30, same z plane.
        let ab = Segment::new(Point3::new(0.0, 0.0, 5.0), Point3::new(100.0, 0.0, 5.0));
        let cd = Segment::new(Point3::new(30.0, -50.0, 5.0), Point3::new(30.0, 50.0, 5.0));

        let (on_ab, on_cd) = closest_points_between_segments(&ab, &cd);
        assert_relative_eq!(on_ab, Point3::new(30.0, 0.0, 5.0), epsilon = 1e-9);
        assert_relative_eq!(on_cd, Point3::new(30.0, 0.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn skew_perpendicular_segments_report_the_gap() {
        let ab = Segment::new(Point3::new(0.0, 0.0, 10.0), Point3::new(100.0, 0.0, 10.0));
        let cd = Segment::new(Point3::new(40.0, -50.0, 0.0), Point3::new(40.0, 50.0, 0.0));

        let (on_ab, on_cd) = closest_points_between_segments(&ab, &cd);
        assert_relative_eq!(on_ab, Point3::new(40.0, 0.0, 10.0), epsilon = 1e-9);
        assert_relative_eq!(on_cd, Point3::new(40.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!((on_ab - on_cd).norm(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn clamping_respects_segment_ends() {
        // CD crosses the extension of AB beyond its end.
        let ab = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(50.0, 0.0, 0.0));
        let cd = Segment::new(Point3::new(80.0, -50.0, 0.0), Point3::new(80.0, 50.0, 0.0));

        let (on_ab, on_cd) = closest_points_between_segments(&ab, &cd);
        assert_relative_eq!(on_ab, Point3::new(50.0, 0.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(on_cd, Point3::new(80.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn parallel_segments_produce_no_finite_answer() {
        let ab = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 0.0));
        let cd = Segment::new(Point3::new(0.0, 10.0, 0.0), Point3::new(100.0, 10.0, 0.0));

        let (on_ab, on_cd) = closest_points_between_segments(&ab, &cd);
        // The distance comparison downstream must reject this pair.
        assert!((on_ab - on_cd).norm_squared().is_nan() || (on_ab - on_cd).norm_squared() > 0.0);
    }
}
