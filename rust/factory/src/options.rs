// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Option structs for part creation.
//!
//! Every field is optional; unset fields fall back to the factory's current
//! defaults for that part type. The defaults themselves are option structs
//! too, updated by merging.

use crate::axis::Axis;
use stabwerk_joint::JoinOptions;

/// Options for creating bars.
#[derive(Debug, Clone, Default)]
pub struct BarOptions {
    /// Position of the origin as `[x, y, z]`.
    pub position: Option<[f64; 3]>,

    /// Alignment of the main axis.
    pub axis: Option<Axis>,

    /// Total length. A negative length flips the bar around its axis.
    pub length: Option<f64>,

    /// Ignore `length` and build the bar from `position` to this point.
    pub to: Option<[f64; 3]>,

    /// `[width, height]` of the cross-section.
    pub size: Option<[f64; 2]>,

    /// Extend the bar by `[at_start, at_end]`.
    pub extend: Option<[f64; 2]>,

    /// Draw the part highlighted in the preview.
    pub debug: Option<bool>,
}

impl BarOptions {
    /// These options with unset fields taken from `defaults`.
    pub fn merged_over(&self, defaults: &BarOptions) -> BarOptions {
        BarOptions {
            position: self.position.or(defaults.position),
            axis: self.axis.or(defaults.axis),
            length: self.length.or(defaults.length),
            to: self.to.or(defaults.to),
            size: self.size.or(defaults.size),
            extend: self.extend.or(defaults.extend),
            debug: self.debug.or(defaults.debug),
        }
    }
}

/// Options for creating panels.
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
    /// Position of the origin as `[x, y, z]`.
    pub position: Option<[f64; 3]>,

    /// Alignment of the main axis.
    pub axis: Option<Axis>,

    /// Thickness. A negative thickness flips the panel around its axis.
    pub thickness: Option<f64>,

    /// `[width, height]` of the outline.
    pub size: Option<[f64; 2]>,

    /// Draw the part highlighted in the preview.
    pub debug: Option<bool>,
}

impl PanelOptions {
    /// These options with unset fields taken from `defaults`.
    pub fn merged_over(&self, defaults: &PanelOptions) -> PanelOptions {
        PanelOptions {
            position: self.position.or(defaults.position),
            axis: self.axis.or(defaults.axis),
            thickness: self.thickness.or(defaults.thickness),
            size: self.size.or(defaults.size),
            debug: self.debug.or(defaults.debug),
        }
    }
}

/// Options for creating markers.
#[derive(Debug, Clone, Default)]
pub struct MarkerOptions {
    /// Position as `[x, y, z]`.
    pub position: Option<[f64; 3]>,

    /// Alignment of the main axis.
    pub axis: Option<Axis>,

    /// Radius.
    pub radius: Option<f64>,

    /// Color as a hex number, e.g. `0xff00ff`.
    pub color: Option<u32>,

    /// Draw the part highlighted in the preview.
    pub debug: Option<bool>,
}

impl MarkerOptions {
    /// These options with unset fields taken from `defaults`.
    pub fn merged_over(&self, defaults: &MarkerOptions) -> MarkerOptions {
        MarkerOptions {
            position: self.position.or(defaults.position),
            axis: self.axis.or(defaults.axis),
            radius: self.radius.or(defaults.radius),
            color: self.color.or(defaults.color),
            debug: self.debug.or(defaults.debug),
        }
    }
}

/// Per-call overrides for joining. Unset fields fall back to the factory's
/// join defaults.
#[derive(Debug, Clone, Default)]
pub struct JoinSettings {
    /// Hole diameter for overlapping connections.
    pub overlap_hole_dia: Option<f64>,

    /// Draw the synthesized connectors highlighted in the preview.
    pub debug: Option<bool>,
}

impl JoinSettings {
    /// Resolves these settings against concrete default options.
    pub fn resolved_over(&self, defaults: &JoinOptions) -> JoinOptions {
        JoinOptions {
            overlap_hole_dia: self.overlap_hole_dia.unwrap_or(defaults.overlap_hole_dia),
            debug: self.debug.unwrap_or(defaults.debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_fields_win_over_defaults() {
        let defaults = BarOptions {
            size: Some([40.0, 40.0]),
            length: Some(100.0),
            axis: Some(Axis::PosZ),
            ..Default::default()
        };

        let opts = BarOptions {
            length: Some(600.0),
            ..Default::default()
        };

        let merged = opts.merged_over(&defaults);
        assert_eq!(merged.length, Some(600.0));
        assert_eq!(merged.size, Some([40.0, 40.0]));
        assert_eq!(merged.axis, Some(Axis::PosZ));
    }

    #[test]
    fn join_settings_resolve_to_concrete_options() {
        let defaults = JoinOptions::default();
        let settings = JoinSettings {
            overlap_hole_dia: Some(6.0),
            debug: None,
        };

        let resolved = settings.resolved_over(&defaults);
        assert_eq!(resolved.overlap_hole_dia, 6.0);
        assert!(!resolved.debug);
    }
}
