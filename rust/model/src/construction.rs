// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for construction parts.
//!
//! The [`Construction`] owns every part behind a stable, generational
//! [`PartKey`]. Parts are only ever added: bars accumulate holes during
//! joining and connectors are appended, but nothing is deleted. An insertion
//! order list keeps iteration deterministic for reporting.

use slotmap::{new_key_type, SlotMap};

use crate::bar::Bar;
use crate::error::{Error, Result};
use crate::parts::{Connector, Marker, Panel, Part};

new_key_type! {
    /// Key for any part owned by a construction.
    pub struct PartKey;
}

/// The arena owning all parts of one construction.
///
/// # Example
///
/// ```
/// use stabwerk_model::{Bar, Construction};
///
/// let mut construction = Construction::new();
/// let key = construction.add_bar(Bar::new(500.0, [40.0, 40.0])).unwrap();
///
/// assert!(construction.bar(key).is_some());
/// assert_eq!(construction.part_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Construction {
    parts: SlotMap<PartKey, Part>,
    order: Vec<PartKey>,
}

impl Construction {
    /// Creates a new, empty construction.
    pub fn new() -> Self {
        Self {
            parts: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Adds a bar, rejecting degenerate dimensions.
    pub fn add_bar(&mut self, bar: Bar) -> Result<PartKey> {
        if bar.length <= 0.0 {
            return Err(Error::BarLength(bar.length));
        }
        if bar.size[0] <= 0.0 || bar.size[1] <= 0.0 {
            return Err(Error::BarSize(bar.size[0], bar.size[1]));
        }

        Ok(self.insert(Part::Bar(bar)))
    }

    /// Adds a panel, rejecting degenerate dimensions.
    pub fn add_panel(&mut self, panel: Panel) -> Result<PartKey> {
        if panel.thickness <= 0.0 {
            return Err(Error::PanelThickness(panel.thickness));
        }
        if panel.size[0] <= 0.0 || panel.size[1] <= 0.0 {
            return Err(Error::PanelSize(panel.size[0], panel.size[1]));
        }

        Ok(self.insert(Part::Panel(panel)))
    }

    /// Adds a marker.
    pub fn add_marker(&mut self, marker: Marker) -> Result<PartKey> {
        if marker.radius <= 0.0 {
            return Err(Error::MarkerRadius(marker.radius));
        }

        Ok(self.insert(Part::Marker(marker)))
    }

    /// Adds a connector. Every referenced part must already exist.
    pub fn add_connector(&mut self, connector: Connector) -> Result<PartKey> {
        if connector.parts.len() < 2 {
            return Err(Error::ConnectorArity(connector.parts.len()));
        }
        for &part_key in &connector.parts {
            if !self.parts.contains_key(part_key) {
                return Err(Error::PartNotFound(part_key));
            }
        }

        Ok(self.insert(Part::Connector(connector)))
    }

    fn insert(&mut self, part: Part) -> PartKey {
        let key = self.parts.insert(part);
        self.order.push(key);
        key
    }

    /// Returns the part for the given key, or `None` if not found.
    pub fn part(&self, key: PartKey) -> Option<&Part> {
        self.parts.get(key)
    }

    /// Mutable access to a part.
    pub fn part_mut(&mut self, key: PartKey) -> Option<&mut Part> {
        self.parts.get_mut(key)
    }

    /// The bar behind `key`, or `None` if the key is missing or not a bar.
    pub fn bar(&self, key: PartKey) -> Option<&Bar> {
        self.parts.get(key).and_then(Part::as_bar)
    }

    /// Mutable access to the bar behind `key`.
    pub fn bar_mut(&mut self, key: PartKey) -> Option<&mut Bar> {
        match self.parts.get_mut(key) {
            Some(Part::Bar(bar)) => Some(bar),
            _ => None,
        }
    }

    /// All parts in insertion order.
    pub fn parts(&self) -> impl Iterator<Item = (PartKey, &Part)> {
        self.order
            .iter()
            .filter_map(move |&key| self.parts.get(key).map(|part| (key, part)))
    }

    /// All bars in insertion order.
    pub fn bars(&self) -> impl Iterator<Item = (PartKey, &Bar)> {
        self.parts().filter_map(|(key, part)| match part {
            Part::Bar(bar) => Some((key, bar)),
            _ => None,
        })
    }

    /// Keys of all bars in insertion order.
    pub fn bar_keys(&self) -> Vec<PartKey> {
        self.bars().map(|(key, _)| key).collect()
    }

    /// All panels in insertion order.
    pub fn panels(&self) -> impl Iterator<Item = (PartKey, &Panel)> {
        self.parts().filter_map(|(key, part)| match part {
            Part::Panel(panel) => Some((key, panel)),
            _ => None,
        })
    }

    /// All connectors in insertion order.
    pub fn connectors(&self) -> impl Iterator<Item = (PartKey, &Connector)> {
        self.parts().filter_map(|(key, part)| match part {
            Part::Connector(connector) => Some((key, connector)),
            _ => None,
        })
    }

    /// Group names in first-seen order, without duplicates.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (_, part) in self.parts() {
            if !names.iter().any(|name| name == part.group()) {
                names.push(part.group().to_string());
            }
        }
        names
    }

    /// Keys of all bars assigned to `group`, in insertion order.
    pub fn bars_in_group(&self, group: &str) -> Vec<PartKey> {
        self.bars()
            .filter(|(_, bar)| bar.group == group)
            .map(|(key, _)| key)
            .collect()
    }

    /// Total number of parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the construction has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::ConnectorKind;

    #[test]
    fn new_construction_is_empty() {
        let construction = Construction::new();
        assert!(construction.is_empty());
        assert_eq!(construction.part_count(), 0);
    }

    #[test]
    fn degenerate_bars_are_rejected() {
        let mut construction = Construction::new();

        assert!(matches!(
            construction.add_bar(Bar::new(0.0, [40.0, 40.0])),
            Err(Error::BarLength(_))
        ));
        assert!(matches!(
            construction.add_bar(Bar::new(500.0, [40.0, 0.0])),
            Err(Error::BarSize(_, _))
        ));
        assert!(construction.is_empty());
    }

    #[test]
    fn typed_accessors_filter_by_kind() {
        let mut construction = Construction::new();
        let bar_key = construction.add_bar(Bar::new(500.0, [40.0, 40.0])).unwrap();
        let panel_key = construction
            .add_panel(Panel::new(12.0, [100.0, 200.0]))
            .unwrap();

        assert!(construction.bar(bar_key).is_some());
        assert!(construction.bar(panel_key).is_none());
        assert_eq!(construction.bars().count(), 1);
        assert_eq!(construction.panels().count(), 1);
    }

    #[test]
    fn connector_requires_existing_parts() {
        let mut construction = Construction::new();
        let a = construction.add_bar(Bar::new(500.0, [40.0, 40.0])).unwrap();
        let b = construction.add_bar(Bar::new(300.0, [40.0, 40.0])).unwrap();

        let connector = Connector::new(ConnectorKind::Butt, 80.0, vec![a, b]);
        assert!(construction.add_connector(connector).is_ok());

        let lonely = Connector::new(ConnectorKind::Butt, 80.0, vec![a]);
        assert!(matches!(
            construction.add_connector(lonely),
            Err(Error::ConnectorArity(1))
        ));
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let mut construction = Construction::new();

        let mut legs = Bar::new(500.0, [40.0, 40.0]);
        legs.group = "legs".to_string();
        let mut top = Bar::new(300.0, [40.0, 40.0]);
        top.group = "top".to_string();
        let mut more_legs = Bar::new(500.0, [40.0, 40.0]);
        more_legs.group = "legs".to_string();

        construction.add_bar(legs).unwrap();
        construction.add_bar(top).unwrap();
        construction.add_bar(more_legs).unwrap();

        assert_eq!(construction.group_names(), vec!["legs", "top"]);
        assert_eq!(construction.bars_in_group("legs").len(), 2);
    }
}
