// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The drill list: bars grouped by rounded length, each carrying its holes.

use stabwerk_model::{Construction, PartKey};

use crate::helpers::group_by_key;

/// Groups all bars by their length rounded to whole units, sorted ascending.
///
/// The holes to drill are read off the bars themselves; this list only
/// decides which bars share one drilling setup.
pub fn drill_pieces(construction: &Construction) -> Vec<(i64, Vec<PartKey>)> {
    let mut bars: Vec<(PartKey, f64)> = construction
        .bars()
        .map(|(key, bar)| (key, bar.length))
        .collect();

    bars.sort_by(|a, b| a.1.total_cmp(&b.1));

    group_by_key(bars, |(_, length)| length.round() as i64)
        .into_iter()
        .map(|(length, group)| (length, group.into_iter().map(|(key, _)| key).collect()))
        .collect()
}
