// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broad-phase pruning of bar pairs.
//!
//! Exact detection is O(1) per pair but there are O(n²) pairs; the bounding
//! boxes rule out pairs that cannot possibly touch. The boxes are padded by
//! half of each bar's larger cross-section dimension, which covers any
//! contact offset within the cross-section, so the filter never discards a
//! truly touching pair.

use stabwerk_model::{Aabb, Construction, PartKey};

/// Finds the unordered bar pairs whose bounding boxes overlap.
///
/// Keys that do not refer to bars in the construction are ignored. Pairs are
/// returned in input order: `(bars[i], bars[j])` with `i < j`.
pub fn find_candidate_pairs(
    construction: &Construction,
    bars: &[PartKey],
) -> Vec<(PartKey, PartKey)> {
    let boxes: Vec<(PartKey, Aabb)> = bars
        .iter()
        .filter_map(|&key| {
            construction
                .bar(key)
                .map(|bar| (key, bar.bounding_box()))
        })
        .collect();

    let mut pairs = Vec::new();

    for (i, (key_a, box_a)) in boxes.iter().enumerate() {
        for (key_b, box_b) in &boxes[i + 1..] {
            if box_a.intersects(box_b) {
                pairs.push((*key_a, *key_b));
            }
        }
    }

    pairs
}
