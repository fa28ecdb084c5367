// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grouping helpers for the list builders.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Groups items by a key, keeping groups in first-seen order and items in
/// input order within each group.
pub fn group_by_key<T, K>(items: Vec<T>, key_fn: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}

/// Rounds a value to the given number of decimals and formats it as a stable
/// grouping key.
pub fn precision_key(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
