// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Part types and the tagged part union.
//!
//! Every part carries a name, a group, a pose and a debug flag. [`Part`] is an
//! explicit tagged union; consumers dispatch by matching the variant instead
//! of downcasting.

use nalgebra::{Point3, UnitQuaternion, Vector3};

use crate::bar::Bar;
use crate::construction::PartKey;

/// Position and orientation of a part in global space.
///
/// A part's main axis is its rotated local +z axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub position: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Pose {
    /// The identity pose: at the origin, unrotated.
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation carrying the local +z axis onto `dir`.
///
/// `dir` must be a unit vector. The antiparallel case (`dir == -z`) has no
/// unique solution; we pick a half-turn about the x axis.
pub fn rotation_from_z(dir: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(&Vector3::z(), dir).unwrap_or_else(|| {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI)
    })
}

/// A flat board with a rectangular outline.
///
/// Panels are model-only: they never participate in connection detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub name: String,
    pub group: String,
    pub pose: Pose,
    pub debug: bool,

    /// Thickness along the local +z axis.
    pub thickness: f64,
    /// `[width, height]` of the outline.
    pub size: [f64; 2],
}

impl Panel {
    pub fn new(thickness: f64, size: [f64; 2]) -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            pose: Pose::identity(),
            debug: false,
            thickness,
            size,
        }
    }
}

/// A visual aid marking a point of interest. Has no physical extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    pub group: String,
    pub pose: Pose,
    pub debug: bool,

    pub radius: f64,
    /// Color as a hex number, e.g. `0xff00ff`.
    pub color: Option<u32>,
}

impl Marker {
    pub fn new(radius: f64, color: Option<u32>) -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            pose: Pose::identity(),
            debug: false,
            radius,
            color,
        }
    }
}

/// The mechanical joint kind a connector realizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// One bar's end resting flush on another bar's side.
    Butt,
    /// Bars' sides touching along their length, possibly chained through
    /// several bars.
    Overlap,
}

/// A synthesized connector part joining two or more bars.
///
/// The connector runs from its pose position along the rotated +z axis for
/// `length` units. `parts` lists the joined bars in chain order: exactly two
/// for a butt, two or more for an overlap chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub name: String,
    pub group: String,
    pub pose: Pose,
    pub debug: bool,

    pub kind: ConnectorKind,
    pub length: f64,
    pub parts: Vec<PartKey>,
}

impl Connector {
    pub fn new(kind: ConnectorKind, length: f64, parts: Vec<PartKey>) -> Self {
        Self {
            name: String::new(),
            group: String::new(),
            pose: Pose::identity(),
            debug: false,
            kind,
            length,
            parts,
        }
    }
}

/// Tagged union over every part type a construction can own.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Bar(Bar),
    Panel(Panel),
    Marker(Marker),
    Connector(Connector),
}

impl Part {
    /// The part's name.
    pub fn name(&self) -> &str {
        match self {
            Part::Bar(p) => &p.name,
            Part::Panel(p) => &p.name,
            Part::Marker(p) => &p.name,
            Part::Connector(p) => &p.name,
        }
    }

    /// The group the part was created in.
    pub fn group(&self) -> &str {
        match self {
            Part::Bar(p) => &p.group,
            Part::Panel(p) => &p.group,
            Part::Marker(p) => &p.group,
            Part::Connector(p) => &p.group,
        }
    }

    /// The part's pose in global space.
    pub fn pose(&self) -> &Pose {
        match self {
            Part::Bar(p) => &p.pose,
            Part::Panel(p) => &p.pose,
            Part::Marker(p) => &p.pose,
            Part::Connector(p) => &p.pose,
        }
    }

    /// Whether the part is drawn highlighted in previews.
    pub fn debug(&self) -> bool {
        match self {
            Part::Bar(p) => p.debug,
            Part::Panel(p) => p.debug,
            Part::Marker(p) => p.debug,
            Part::Connector(p) => p.debug,
        }
    }

    /// The contained bar, if this part is one.
    pub fn as_bar(&self) -> Option<&Bar> {
        match self {
            Part::Bar(bar) => Some(bar),
            _ => None,
        }
    }

    /// The contained connector, if this part is one.
    pub fn as_connector(&self) -> Option<&Connector> {
        match self {
            Part::Connector(connector) => Some(connector),
            _ => None,
        }
    }
}
