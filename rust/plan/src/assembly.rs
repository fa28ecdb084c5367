// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly naming: identical bars within a group share one name.
//!
//! Every bar is normalized first, then bars are bucketed by tolerant
//! equality within their construction group and named `GROUP_n`. Two bars
//! that end up with the same name are interchangeable during assembly.

use stabwerk_model::{Construction, PartKey, Tolerance};

/// Normalizes all bars and assigns `GROUP_n` names to equality buckets.
///
/// Bucketing is greedy in insertion order: each bar joins the first bucket
/// whose representative it equals, so numbering follows creation order.
pub fn assign_assembly_names(construction: &mut Construction, tol: &Tolerance) {
    let keys = construction.bar_keys();
    for &key in &keys {
        if let Some(bar) = construction.bar_mut(key) {
            bar.normalize(tol);
        }
    }

    for group_name in construction.group_names() {
        let group_keys = construction.bars_in_group(&group_name);

        let mut buckets: Vec<Vec<PartKey>> = Vec::new();

        for key in group_keys {
            let mut placed = false;

            for bucket in &mut buckets {
                let Some(&representative) = bucket.first() else {
                    continue;
                };

                let equal = match (construction.bar(representative), construction.bar(key)) {
                    (Some(a), Some(b)) => a.equals(b, tol),
                    _ => false,
                };

                if equal {
                    bucket.push(key);
                    placed = true;
                    break;
                }
            }

            if !placed {
                buckets.push(vec![key]);
            }
        }

        let prefix = if group_name.is_empty() {
            "PART"
        } else {
            group_name.as_str()
        };

        for (i, bucket) in buckets.iter().enumerate() {
            let name = format!("{}_{}", prefix, i + 1);
            for &key in bucket {
                if let Some(bar) = construction.bar_mut(key) {
                    bar.name = name.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stabwerk_model::{Bar, BarSide};

    fn grouped_bar(group: &str, length: f64) -> Bar {
        let mut bar = Bar::new(length, [40.0, 40.0]);
        bar.group = group.to_string();
        bar
    }

    #[test]
    fn equal_bars_share_a_name() {
        let tol = Tolerance::default();
        let mut construction = Construction::new();

        let a = construction.add_bar(grouped_bar("legs", 500.0)).unwrap();
        let b = construction.add_bar(grouped_bar("legs", 500.0)).unwrap();
        let c = construction.add_bar(grouped_bar("legs", 300.0)).unwrap();

        assign_assembly_names(&mut construction, &tol);

        assert_eq!(construction.bar(a).unwrap().name, "legs_1");
        assert_eq!(construction.bar(b).unwrap().name, "legs_1");
        assert_eq!(construction.bar(c).unwrap().name, "legs_2");
    }

    #[test]
    fn groups_are_numbered_independently() {
        let tol = Tolerance::default();
        let mut construction = Construction::new();

        let leg = construction.add_bar(grouped_bar("legs", 500.0)).unwrap();
        let top = construction.add_bar(grouped_bar("top", 500.0)).unwrap();

        assign_assembly_names(&mut construction, &tol);

        assert_eq!(construction.bar(leg).unwrap().name, "legs_1");
        assert_eq!(construction.bar(top).unwrap().name, "top_1");
    }

    #[test]
    fn rotated_square_bars_share_a_name() {
        let tol = Tolerance::default();
        let mut construction = Construction::new();

        // Same drilling, recorded on different sides of a square bar: the
        // normalization re-bases the side labels so the bars compare equal.
        let mut a = grouped_bar("rails", 500.0);
        a.add_hole(100.0, BarSide::North, 10.0, None);
        let a = construction.add_bar(a).unwrap();

        let mut b = grouped_bar("rails", 500.0);
        b.add_hole(100.0, BarSide::East, 10.0, None);
        let b = construction.add_bar(b).unwrap();

        assign_assembly_names(&mut construction, &tol);

        assert_eq!(construction.bar(a).unwrap().name, "rails_1");
        assert_eq!(construction.bar(b).unwrap().name, "rails_1");
    }
}
