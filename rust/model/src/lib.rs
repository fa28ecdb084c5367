// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Stabwerk Model
//!
//! Part model and construction arena for parametric bar furniture.
//!
//! A [`Construction`] owns every part (bars, panels, markers, connectors)
//! inside a slot map with stable, generational [`PartKey`]s. Bars carry their
//! own geometric primitives (side lines, normals, bounding volume) and the
//! canonicalization logic ([`Bar::normalize`], [`Bar::equals`]) used to group
//! identical bars for cut lists and assembly naming. The joint engine in
//! `stabwerk-joint` reads bar geometry from the arena and appends holes and
//! connector parts back into it.

pub mod bar;
pub mod bounds;
pub mod construction;
pub mod error;
pub mod parts;
pub mod segment;
pub mod serialization;
pub mod side;
pub mod tolerance;

pub use bar::{Bar, BarHole};
pub use bounds::Aabb;
pub use construction::{Construction, PartKey};
pub use error::{Error, Result};
pub use parts::{rotation_from_z, Connector, ConnectorKind, Marker, Panel, Part, Pose};
pub use segment::Segment;
pub use serialization::{from_snapshot, to_snapshot, ConstructionSnapshot, PartSnapshot};
pub use side::BarSide;
pub use tolerance::Tolerance;
