// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bars and their drill holes.
//!
//! A bar is a straight piece of stock with a rectangular cross-section. It
//! runs from its pose position along the rotated local +z axis. The geometric
//! primitives here (side lines, normals, bounding volume) are what the joint
//! engine builds its connection detection on, and [`Bar::normalize`] /
//! [`Bar::equals`] are the canonicalization used to group identical bars.

use nalgebra::{Point3, Vector3};

use crate::bounds::Aabb;
use crate::parts::{rotation_from_z, Pose};
use crate::segment::Segment;
use crate::side::BarSide;
use crate::tolerance::Tolerance;

/// A drill hole in a bar.
///
/// `position` is the distance from the bar start along its axis. A hole with
/// no depth is a through-hole spanning both opposing faces; a hole with a
/// depth is blind and exists on the stated side only.
#[derive(Debug, Clone, PartialEq)]
pub struct BarHole {
    pub position: f64,
    pub side: BarSide,
    pub diameter: f64,
    pub depth: Option<f64>,
}

impl BarHole {
    pub fn new(position: f64, side: BarSide, diameter: f64, depth: Option<f64>) -> Self {
        Self {
            position,
            side,
            diameter,
            depth,
        }
    }

    /// Returns `true` if the hole goes all the way through the bar.
    pub fn is_through(&self) -> bool {
        self.depth.is_none()
    }

    /// Tolerant equality on position, side, diameter and depth.
    pub fn equals(&self, other: &BarHole, tol: &Tolerance) -> bool {
        if !tol.approx_eq(self.position, other.position) {
            return false;
        }

        if self.side != other.side {
            return false;
        }

        if !tol.approx_eq(self.diameter, other.diameter) {
            return false;
        }

        match (self.depth, other.depth) {
            (Some(a), Some(b)) => tol.approx_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// A long part with a rectangular cross-section.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub group: String,
    pub pose: Pose,
    pub debug: bool,

    /// Total length along the bar axis.
    pub length: f64,
    /// `[width, height]` of the cross-section.
    pub size: [f64; 2],
    /// Drill holes, appended by the joint engine.
    pub holes: Vec<BarHole>,
}

impl Bar {
    pub fn new(length: f64, size: [f64; 2]) -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            pose: Pose::identity(),
            debug: false,
            length,
            size,
            holes: Vec::new(),
        }
    }

    /// Builds a bar running from `from` to `to`.
    pub fn between_two_points(from: Point3<f64>, to: Point3<f64>, size: [f64; 2]) -> Self {
        let delta = to - from;
        let length = delta.norm();

        let mut bar = Bar::new(length, size);
        bar.pose.position = from;
        bar.pose.rotation = rotation_from_z(&delta.normalize());
        bar
    }

    /// Appends a drill hole. Pass `None` as depth for a through-hole.
    pub fn add_hole(&mut self, position: f64, side: BarSide, diameter: f64, depth: Option<f64>) {
        self.holes.push(BarHole::new(position, side, diameter, depth));
    }

    /// Holes recorded on the given side.
    pub fn holes_on_side(&self, side: BarSide) -> impl Iterator<Item = &BarHole> {
        self.holes.iter().filter(move |hole| hole.side == side)
    }

    /// Point at a given distance from the start of the bar.
    pub fn point_from_start(&self, l: f64) -> Point3<f64> {
        self.pose.position + self.pose.rotation * Vector3::new(0.0, 0.0, l)
    }

    /// Point at a given distance from the end of the bar.
    pub fn point_from_end(&self, l: f64) -> Point3<f64> {
        self.point_from_start(self.length - l)
    }

    /// Start point of the bar.
    pub fn start(&self) -> Point3<f64> {
        self.pose.position
    }

    /// End point of the bar.
    pub fn end(&self) -> Point3<f64> {
        self.point_from_end(0.0)
    }

    /// Point on one of the bar's side lines at a given distance from the
    /// start of that side.
    pub fn point_on_side(&self, side: BarSide, l: f64) -> Point3<f64> {
        let line = self.line_on_side(side);
        line.point_at(l / self.length)
    }

    /// The smaller cross-section dimension.
    pub fn size_min(&self) -> f64 {
        self.size[0].min(self.size[1])
    }

    /// The larger cross-section dimension.
    pub fn size_max(&self) -> f64 {
        self.size[0].max(self.size[1])
    }

    /// Are both cross-section dimensions equal?
    pub fn is_square(&self, tol: &Tolerance) -> bool {
        tol.approx_eq(self.size[0], self.size[1])
    }

    /// Unit normal of a side in global space.
    pub fn side_normal(&self, side: BarSide) -> Vector3<f64> {
        self.pose.rotation * side.local_normal()
    }

    /// Local-space lateral offset to the centerline of a side.
    pub fn side_local(&self, side: BarSide) -> Vector3<f64> {
        side.local_normal()
            .component_mul(&Vector3::new(self.size[0] * 0.5, self.size[1] * 0.5, 0.0))
    }

    /// Centerline of a side, from bar start to bar end, in global space.
    pub fn line_on_side(&self, side: BarSide) -> Segment {
        let side_vec = self.side_local(side);

        let start = self.pose.position + self.pose.rotation * side_vec;

        let mut end_local = side_vec;
        end_local.z = self.length;
        let end = self.pose.position + self.pose.rotation * end_local;

        Segment::new(start, end)
    }

    /// Center line of the bar, from start to end.
    pub fn center_line(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }

    /// Axis-aligned bounding box around the centerline, padded on every axis
    /// by half the larger cross-section dimension. Not precise; only used for
    /// broad-phase pair pruning.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_corners(self.start(), self.end()).inflated(self.size_max() * 0.5)
    }

    /// Canonicalizes the hole list so that equal physical bars compare equal.
    ///
    /// Holes are sorted by position. On square bars the side labels are
    /// rotation-invariant, so every side index is re-based against the first
    /// hole's side. Through-holes exist on two opposing faces; they are
    /// recorded on the lower-indexed one.
    pub fn normalize(&mut self, tol: &Tolerance) {
        self.holes
            .sort_by(|a, b| a.position.total_cmp(&b.position));

        let first_hole_side = self.holes.first().map_or(0, |hole| hole.side.index());

        if self.is_square(tol) {
            for hole in &mut self.holes {
                hole.side = hole.side.rotated_by(first_hole_side);
            }
        }

        for hole in &mut self.holes {
            if hole.is_through() && hole.side.index() > 1 {
                hole.side = hole.side.opposite();
            }
        }
    }

    /// Tolerant equality on length, cross-section and the hole list.
    ///
    /// Call [`Bar::normalize`] on both bars first; equality is positional
    /// over the hole lists. Pose is deliberately ignored: this is identity
    /// of the manufactured piece, not of its placement.
    pub fn equals(&self, other: &Bar, tol: &Tolerance) -> bool {
        if !tol.approx_eq(self.length, other.length) {
            return false;
        }

        if !tol.approx_eq(self.size[0], other.size[0]) {
            return false;
        }

        if !tol.approx_eq(self.size[1], other.size[1]) {
            return false;
        }

        if self.holes.len() != other.holes.len() {
            return false;
        }

        self.holes
            .iter()
            .zip(&other.holes)
            .all(|(a, b)| a.equals(b, tol))
    }
}
