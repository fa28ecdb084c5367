// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for constructions.
//!
//! Arena keys are not stable across processes, so a construction is exported
//! as a [`ConstructionSnapshot`] with index-based part references and
//! restored by re-inserting the parts in order. Connectors always follow the
//! bars they join, so a single forward pass can remap their references.

use nalgebra::{Point3, Quaternion, UnitQuaternion};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bar::{Bar, BarHole};
use crate::construction::{Construction, PartKey};
use crate::error::{Error, Result};
use crate::parts::{Connector, ConnectorKind, Marker, Panel, Part, Pose};
use crate::side::BarSide;

/// Serializable representation of a full construction.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConstructionSnapshot {
    pub parts: Vec<PartSnapshot>,
}

/// Common fields every part snapshot carries.
#[derive(Debug, Serialize, Deserialize)]
pub struct PartCommon {
    pub name: String,
    pub group: String,
    pub position: [f64; 3],
    /// Rotation quaternion as `[x, y, z, w]`.
    pub rotation: [f64; 4],
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HoleSnapshot {
    pub position: f64,
    pub side: u8,
    pub diameter: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSnapshot {
    Bar {
        #[serde(flatten)]
        common: PartCommon,
        length: f64,
        size: [f64; 2],
        holes: Vec<HoleSnapshot>,
    },
    Panel {
        #[serde(flatten)]
        common: PartCommon,
        thickness: f64,
        size: [f64; 2],
    },
    Marker {
        #[serde(flatten)]
        common: PartCommon,
        radius: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<u32>,
    },
    Connector {
        #[serde(flatten)]
        common: PartCommon,
        connector_kind: ConnectorKindSnapshot,
        length: f64,
        /// Indices into the snapshot's part list.
        parts: Vec<usize>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorKindSnapshot {
    Butt,
    Overlap,
}

fn common_of(name: &str, group: &str, pose: &Pose, debug: bool) -> PartCommon {
    PartCommon {
        name: name.to_string(),
        group: group.to_string(),
        position: [pose.position.x, pose.position.y, pose.position.z],
        rotation: [
            pose.rotation.coords.x,
            pose.rotation.coords.y,
            pose.rotation.coords.z,
            pose.rotation.coords.w,
        ],
        debug,
    }
}

fn pose_of(common: &PartCommon) -> Pose {
    let [x, y, z, w] = common.rotation;
    Pose {
        position: Point3::new(common.position[0], common.position[1], common.position[2]),
        rotation: UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z)),
    }
}

/// Exports a construction to its snapshot form.
pub fn to_snapshot(construction: &Construction) -> ConstructionSnapshot {
    let mut indices: FxHashMap<PartKey, usize> = FxHashMap::default();
    for (i, (key, _)) in construction.parts().enumerate() {
        indices.insert(key, i);
    }

    let parts = construction
        .parts()
        .map(|(_, part)| match part {
            Part::Bar(bar) => PartSnapshot::Bar {
                common: common_of(&bar.name, &bar.group, &bar.pose, bar.debug),
                length: bar.length,
                size: bar.size,
                holes: bar
                    .holes
                    .iter()
                    .map(|hole| HoleSnapshot {
                        position: hole.position,
                        side: hole.side.index() as u8,
                        diameter: hole.diameter,
                        depth: hole.depth,
                    })
                    .collect(),
            },
            Part::Panel(panel) => PartSnapshot::Panel {
                common: common_of(&panel.name, &panel.group, &panel.pose, panel.debug),
                thickness: panel.thickness,
                size: panel.size,
            },
            Part::Marker(marker) => PartSnapshot::Marker {
                common: common_of(&marker.name, &marker.group, &marker.pose, marker.debug),
                radius: marker.radius,
                color: marker.color,
            },
            Part::Connector(connector) => PartSnapshot::Connector {
                common: common_of(
                    &connector.name,
                    &connector.group,
                    &connector.pose,
                    connector.debug,
                ),
                connector_kind: match connector.kind {
                    ConnectorKind::Butt => ConnectorKindSnapshot::Butt,
                    ConnectorKind::Overlap => ConnectorKindSnapshot::Overlap,
                },
                length: connector.length,
                parts: connector
                    .parts
                    .iter()
                    .filter_map(|key| indices.get(key).copied())
                    .collect(),
            },
        })
        .collect();

    ConstructionSnapshot { parts }
}

/// Restores a construction from its snapshot form.
///
/// Part validation applies as on normal insertion; a connector referencing a
/// part index that has not been restored yet is an error.
pub fn from_snapshot(snapshot: &ConstructionSnapshot) -> Result<Construction> {
    let mut construction = Construction::new();
    let mut keys: Vec<PartKey> = Vec::with_capacity(snapshot.parts.len());

    for part in &snapshot.parts {
        let key = match part {
            PartSnapshot::Bar {
                common,
                length,
                size,
                holes,
            } => {
                let mut bar = Bar::new(*length, *size);
                bar.name = common.name.clone();
                bar.group = common.group.clone();
                bar.pose = pose_of(common);
                bar.debug = common.debug;
                bar.holes = holes
                    .iter()
                    .map(|hole| {
                        BarHole::new(
                            hole.position,
                            BarSide::from_index(hole.side as usize),
                            hole.diameter,
                            hole.depth,
                        )
                    })
                    .collect();
                construction.add_bar(bar)?
            }
            PartSnapshot::Panel {
                common,
                thickness,
                size,
            } => {
                let mut panel = Panel::new(*thickness, *size);
                panel.name = common.name.clone();
                panel.group = common.group.clone();
                panel.pose = pose_of(common);
                panel.debug = common.debug;
                construction.add_panel(panel)?
            }
            PartSnapshot::Marker {
                common,
                radius,
                color,
            } => {
                let mut marker = Marker::new(*radius, *color);
                marker.name = common.name.clone();
                marker.group = common.group.clone();
                marker.pose = pose_of(common);
                marker.debug = common.debug;
                construction.add_marker(marker)?
            }
            PartSnapshot::Connector {
                common,
                connector_kind,
                length,
                parts,
            } => {
                let mut resolved = Vec::with_capacity(parts.len());
                for &index in parts {
                    let key = keys.get(index).ok_or(Error::SnapshotIndex(index))?;
                    resolved.push(*key);
                }

                let kind = match connector_kind {
                    ConnectorKindSnapshot::Butt => ConnectorKind::Butt,
                    ConnectorKindSnapshot::Overlap => ConnectorKind::Overlap,
                };

                let mut connector = Connector::new(kind, *length, resolved);
                connector.name = common.name.clone();
                connector.group = common.group.clone();
                connector.pose = pose_of(common);
                connector.debug = common.debug;
                construction.add_connector(connector)?
            }
        };

        keys.push(key);
    }

    Ok(construction)
}

impl Construction {
    /// Serializes the construction to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&to_snapshot(self))
            .map_err(|err| Error::Serialization(err.to_string()))
    }

    /// Restores a construction from a JSON string.
    pub fn from_json(json: &str) -> Result<Construction> {
        let snapshot: ConstructionSnapshot =
            serde_json::from_str(json).map_err(|err| Error::Serialization(err.to_string()))?;
        from_snapshot(&snapshot)
    }
}
