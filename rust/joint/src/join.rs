// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The join driver: detection, chaining and connector/hole synthesis.
//!
//! `join` runs candidate filtering, per-pair detection, overlap chaining and
//! synthesis in one pass, mutating the construction: bars gain holes and
//! connector parts are appended. "No connection found" is a normal outcome,
//! not an error; degenerate bars must have been rejected before they entered
//! the arena.

use tracing::debug;

use stabwerk_model::{rotation_from_z, Connector, ConnectorKind, Construction, PartKey, Tolerance};

use crate::candidates::find_candidate_pairs;
use crate::chain::group_overlaps;
use crate::detect::{find_butt_connection, find_overlap_connection, ButtConnection, OverlapConnection};

/// Options for joining bars.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOptions {
    /// Hole diameter drilled for overlapping connections.
    pub overlap_hole_dia: f64,

    /// Draw the synthesized connectors highlighted in previews.
    pub debug: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            overlap_hole_dia: 10.0,
            debug: false,
        }
    }
}

/// Detects connections between the given bars and synthesizes the hardware.
///
/// Butt detection is tried for both orderings of each pair before overlap
/// detection; the first hit wins, so one pair yields at most one connection.
/// Overlaps are then chained and every chain becomes one connector plus the
/// holes for the bolt to pass through. Butt joints currently get a connector
/// but no holes.
pub fn join(
    construction: &mut Construction,
    bars: &[PartKey],
    options: &JoinOptions,
    tol: &Tolerance,
) {
    let candidate_pairs = find_candidate_pairs(construction, bars);

    let mut butts: Vec<ButtConnection> = Vec::new();
    let mut overlaps: Vec<OverlapConnection> = Vec::new();

    for &(key_a, key_b) in &candidate_pairs {
        let (Some(bar_a), Some(bar_b)) = (construction.bar(key_a), construction.bar(key_b))
        else {
            continue;
        };

        if let Some(butt) = find_butt_connection(key_a, bar_a, key_b, bar_b, tol) {
            butts.push(butt);
            continue;
        }

        if let Some(butt) = find_butt_connection(key_b, bar_b, key_a, bar_a, tol) {
            butts.push(butt);
            continue;
        }

        if let Some(overlap) = find_overlap_connection(key_a, bar_a, key_b, bar_b, tol) {
            overlaps.push(overlap);
        }
    }

    let situations = group_overlaps(&overlaps, tol);

    debug!(
        pairs = candidate_pairs.len(),
        butts = butts.len(),
        overlaps = overlaps.len(),
        situations = situations.len(),
        "join: detection finished"
    );

    for situation in &situations {
        synthesize_overlap(construction, situation, options);
    }

    for butt in &butts {
        synthesize_butt(construction, butt, options);
    }
}

/// One chain becomes one connector running from the entry face of the first
/// bar to the exit face of the last, with a hole through every bar on the way.
fn synthesize_overlap(
    construction: &mut Construction,
    situation: &[OverlapConnection],
    options: &JoinOptions,
) {
    let (Some(first), Some(last)) = (situation.first(), situation.last()) else {
        return;
    };

    let (entry, exit) = {
        let (Some(bar_first), Some(bar_last)) =
            (construction.bar(first.a), construction.bar(last.b))
        else {
            return;
        };

        (
            bar_first.point_on_side(first.side_a.opposite(), first.pos_a),
            bar_last.point_on_side(last.side_b.opposite(), last.pos_b),
        )
    };

    let delta = exit - entry;
    let length = delta.norm();

    for (i, conn) in situation.iter().enumerate() {
        if let Some(bar) = construction.bar_mut(conn.a) {
            bar.add_hole(
                conn.pos_a,
                conn.side_a.opposite(),
                options.overlap_hole_dia,
                None,
            );
        }

        if i == situation.len() - 1 {
            if let Some(bar) = construction.bar_mut(conn.b) {
                bar.add_hole(conn.pos_b, conn.side_b, options.overlap_hole_dia, None);
            }
        }
    }

    let mut parts: Vec<PartKey> = situation.iter().map(|conn| conn.a).collect();
    parts.push(last.b);

    let mut connector = Connector::new(ConnectorKind::Overlap, length, parts);
    connector.pose.position = entry;
    connector.pose.rotation = rotation_from_z(&delta.normalize());
    connector.debug = options.debug;

    if let Err(err) = construction.add_connector(connector) {
        debug!("join: dropping overlap connector: {err}");
    }
}

/// A butt becomes a connector oriented along the touching bar's axis.
///
/// The length is approximated by the sum of both bars' larger cross-section
/// dimensions. No holes are drilled for butt joints yet.
/// TODO: drill the butt holes once the style layer defines their diameter.
fn synthesize_butt(construction: &mut Construction, butt: &ButtConnection, options: &JoinOptions) {
    let (position, delta, length) = {
        let (Some(bar_a), Some(bar_b)) = (construction.bar(butt.a), construction.bar(butt.b))
        else {
            return;
        };

        let mut delta = bar_a.center_line().direction();
        if !butt.at_start {
            delta = -delta;
        }

        (
            bar_b.point_on_side(butt.side_b.opposite(), butt.pos_b),
            delta,
            bar_a.size_max() + bar_b.size_max(),
        )
    };

    let mut connector = Connector::new(ConnectorKind::Butt, length, vec![butt.a, butt.b]);
    connector.pose.position = position;
    connector.pose.rotation = rotation_from_z(&delta);
    connector.debug = options.debug;

    if let Err(err) = construction.add_connector(connector) {
        debug!("join: dropping butt connector: {err}");
    }
}
