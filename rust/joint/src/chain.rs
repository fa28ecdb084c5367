// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Chaining of pairwise overlaps into single connector runs.
//!
//! Three bars stacked and bolted together produce two pairwise overlap
//! records but one physical connector. Two records chain through a shared
//! bar when they sit on opposing sides of it at the same position along it.
//!
//! The grouping is greedy: each record extends the first chain it matches at
//! either end, or starts a new chain. Chains are never merged with each
//! other, so the result depends on the input order of the records. Detection
//! produces records in candidate-pair order, which keeps runs contiguous in
//! practice; see DESIGN.md for the trade-off.

use stabwerk_model::{BarSide, Tolerance};

use crate::detect::OverlapConnection;

/// Two contacts connect through a shared bar when they are on opposing
/// sides of it at the same station.
fn connected_through(
    side_a: BarSide,
    pos_a: f64,
    side_b: BarSide,
    pos_b: f64,
    tol: &Tolerance,
) -> bool {
    side_a.opposite() == side_b && (pos_a - pos_b).abs() < tol.linear
}

/// Merges pairwise overlap records into ordered chains.
///
/// Each chain is ordered so that record `i`'s B bar is record `i+1`'s A bar;
/// records are swapped on insertion to keep that direction consistent.
pub fn group_overlaps(
    overlaps: &[OverlapConnection],
    tol: &Tolerance,
) -> Vec<Vec<OverlapConnection>> {
    let mut situations: Vec<Vec<OverlapConnection>> = Vec::new();

    for &conn in overlaps {
        let mut matched = false;

        for situation in &mut situations {
            let Some(&left) = situation.first() else {
                continue;
            };
            let Some(&right) = situation.last() else {
                continue;
            };

            if conn.a == left.a
                && connected_through(conn.side_a, conn.pos_a, left.side_a, left.pos_a, tol)
            {
                situation.insert(0, conn.swapped());
                matched = true;
            } else if conn.b == left.a
                && connected_through(conn.side_b, conn.pos_b, left.side_a, left.pos_a, tol)
            {
                situation.insert(0, conn);
                matched = true;
            } else if conn.a == right.b
                && connected_through(conn.side_a, conn.pos_a, right.side_b, right.pos_b, tol)
            {
                situation.push(conn);
                matched = true;
            } else if conn.b == right.b
                && connected_through(conn.side_b, conn.pos_b, right.side_b, right.pos_b, tol)
            {
                situation.push(conn.swapped());
                matched = true;
            }

            if matched {
                break;
            }
        }

        if !matched {
            situations.push(vec![conn]);
        }
    }

    situations
}
