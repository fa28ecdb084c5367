// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The bar cut list: stock sizes and the pieces to cut from each.

use stabwerk_model::{Construction, PartKey};

use crate::helpers::{group_by_key, precision_key};

/// All pieces of one length within a size group.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPieces {
    pub length: f64,
    pub bars: Vec<PartKey>,
}

/// All pieces sharing one cross-section size.
#[derive(Debug, Clone, PartialEq)]
pub struct CutItem {
    pub size: [f64; 2],
    pub pieces: Vec<CutPieces>,
}

/// Builds the cut list: bars grouped by cross-section size, then by length,
/// both rounded to `decimals` for grouping.
pub fn cut_list(construction: &Construction, decimals: usize) -> Vec<CutItem> {
    let mut bars: Vec<(PartKey, f64, [f64; 2])> = construction
        .bars()
        .map(|(key, bar)| (key, bar.length, bar.size))
        .collect();

    bars.sort_by(|a, b| a.2[0].total_cmp(&b.2[0]));

    let size_groups = group_by_key(bars, |(_, _, size)| {
        format!(
            "{}x{}",
            precision_key(size[0], decimals),
            precision_key(size[1], decimals)
        )
    });

    size_groups
        .into_iter()
        .filter_map(|(_, mut group)| {
            let size = group.first()?.2;

            group.sort_by(|a, b| a.1.total_cmp(&b.1));
            let length_groups = group_by_key(group, |(_, length, _)| precision_key(*length, decimals));

            let pieces = length_groups
                .into_iter()
                .filter_map(|(_, bars)| {
                    let length = bars.first()?.1;
                    Some(CutPieces {
                        length,
                        bars: bars.into_iter().map(|(key, _, _)| key).collect(),
                    })
                })
                .collect();

            Some(CutItem { size, pieces })
        })
        .collect()
}
