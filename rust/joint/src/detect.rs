// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Butt and overlap detection for one ordered bar pair.
//!
//! Both detectors scan sides in index order 0..3 and return the first match.
//! The scan order is observable: when several contacts are simultaneously
//! valid, it decides which one gets reported, so it must not change.

use nalgebra::Point3;

use stabwerk_model::{Bar, BarSide, PartKey, Tolerance};

use crate::math::{closest_points_between_segments, manhattan_distance};

/// One bar's end resting flush and perpendicular on another bar's side.
///
/// `pos_a` is the contact's distance along bar A (0 or A's length); `pos_b`
/// is its distance from the start of B's matched side line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtConnection {
    /// Global contact position.
    pub position: Point3<f64>,

    /// The bar whose end is touching.
    pub a: PartKey,
    /// The bar whose side is touched.
    pub b: PartKey,

    /// `true` if A touches with its start, `false` if with its end.
    pub at_start: bool,
    pub pos_a: f64,
    pub pos_b: f64,
    /// The touched side of B.
    pub side_b: BarSide,
}

/// Two bars' sides facing each other and touching along their length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapConnection {
    /// Global contact position.
    pub position: Point3<f64>,

    pub a: PartKey,
    pub b: PartKey,

    pub side_a: BarSide,
    pub side_b: BarSide,

    /// Distance from the start of A's side line to the contact.
    pub pos_a: f64,
    /// Distance from the start of B's side line to the contact.
    pub pos_b: f64,
}

impl OverlapConnection {
    /// The same contact seen from the other bar.
    pub fn swapped(&self) -> Self {
        Self {
            position: self.position,
            a: self.b,
            b: self.a,
            side_a: self.side_b,
            side_b: self.side_a,
            pos_a: self.pos_b,
            pos_b: self.pos_a,
        }
    }
}

/// Does the start or end of bar A rest on one of bar B's sides?
///
/// A side of B qualifies when its normal (for A's start) or negated normal
/// (for A's end) matches A's axis direction, and the matching endpoint of A
/// lies on B's side line. Only the first match in side order 0..3 is
/// returned, start-alignment checked before end-alignment per side. The join
/// driver calls this for both `(A, B)` and `(B, A)`.
pub fn find_butt_connection(
    a_key: PartKey,
    bar_a: &Bar,
    b_key: PartKey,
    bar_b: &Bar,
    tol: &Tolerance,
) -> Option<ButtConnection> {
    let center_line_a = bar_a.center_line();
    let dir_a = center_line_a.direction();

    for side_b in BarSide::ALL {
        let side_line_b = bar_b.line_on_side(side_b);
        let side_normal_b = bar_b.side_normal(side_b);

        // Start of A on this side?
        if manhattan_distance(&side_normal_b, &dir_a) < tol.linear {
            let butt_point = side_line_b.closest_point_to(&center_line_a.start);

            if (butt_point - center_line_a.start).norm_squared() < tol.linear_sq() {
                return Some(ButtConnection {
                    position: center_line_a.start,
                    a: a_key,
                    b: b_key,
                    at_start: true,
                    pos_a: 0.0,
                    pos_b: (center_line_a.start - side_line_b.start).norm(),
                    side_b,
                });
            }
        }

        // End of A on this side?
        if manhattan_distance(&-side_normal_b, &dir_a) < tol.linear {
            let butt_point = side_line_b.closest_point_to(&center_line_a.end);

            if (butt_point - center_line_a.end).norm_squared() < tol.linear_sq() {
                return Some(ButtConnection {
                    position: center_line_a.end,
                    a: a_key,
                    b: b_key,
                    at_start: false,
                    pos_a: bar_a.length,
                    pos_b: (center_line_a.end - side_line_b.start).norm(),
                    side_b,
                });
            }
        }
    }

    None
}

/// Are two of the bars' sides facing each other and touching?
///
/// All 16 side combinations are scanned in order; a combination is only
/// measured when A's negated side normal matches B's side normal (the faces
/// oppose each other). The first touching combination wins.
pub fn find_overlap_connection(
    a_key: PartKey,
    bar_a: &Bar,
    b_key: PartKey,
    bar_b: &Bar,
    tol: &Tolerance,
) -> Option<OverlapConnection> {
    for side_a in BarSide::ALL {
        let line_a = bar_a.line_on_side(side_a);
        let inv_normal_a = -bar_a.side_normal(side_a);

        for side_b in BarSide::ALL {
            let normal_b = bar_b.side_normal(side_b);

            // Sides are not facing each other
            if manhattan_distance(&inv_normal_a, &normal_b) > tol.linear {
                continue;
            }

            let line_b = bar_b.line_on_side(side_b);

            let (point_a, point_b) = closest_points_between_segments(&line_a, &line_b);

            if (point_a - point_b).norm_squared() < tol.linear_sq() {
                return Some(OverlapConnection {
                    position: point_a,
                    a: a_key,
                    b: b_key,
                    side_a,
                    side_b,
                    pos_a: (point_a - line_a.start).norm(),
                    pos_b: (point_b - line_b.start).norm(),
                });
            }
        }
    }

    None
}
