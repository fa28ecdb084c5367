// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The construction factory.
//!
//! User code drives a [`Factory`]: translate the coordinate system, set a
//! group, create parts, join. Positions are transformed by the current
//! matrix; the matrix rotation is not applied to part orientations, which
//! come from the `axis` option alone.

use nalgebra::{Matrix4, Point3, Vector3};
use tracing::debug;

use stabwerk_joint::JoinOptions;
use stabwerk_model::{Bar, Construction, Marker, Panel, PartKey, Tolerance};

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::options::{BarOptions, JoinSettings, MarkerOptions, PanelOptions};

/// Maximum transform stack depth; a deeper stack means user code forgot to
/// pop.
const MAX_STACK_DEPTH: usize = 15;

#[derive(Debug, Clone)]
struct Defaults {
    bar: BarOptions,
    panel: PanelOptions,
    marker: MarkerOptions,
    join: JoinOptions,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            bar: BarOptions {
                size: Some([40.0, 40.0]),
                length: Some(100.0),
                axis: Some(Axis::PosZ),
                ..BarOptions::default()
            },
            panel: PanelOptions {
                size: Some([100.0, 100.0]),
                thickness: Some(12.0),
                axis: Some(Axis::PosZ),
                ..PanelOptions::default()
            },
            marker: MarkerOptions {
                radius: Some(5.0),
                axis: Some(Axis::PosZ),
                ..MarkerOptions::default()
            },
            join: JoinOptions::default(),
        }
    }
}

/// A convenience construction factory, mainly used by the user API.
pub struct Factory {
    /// The construction being built.
    pub construction: Construction,

    matrix_stack: Vec<Matrix4<f64>>,
    grid: [f64; 3],
    current_group: String,
    defaults: Defaults,
    tolerance: Tolerance,
}

impl Factory {
    /// Makes a new factory with an empty construction.
    pub fn new() -> Self {
        Self::with_tolerance(Tolerance::default())
    }

    /// Makes a new factory using the given tolerance for joining.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            construction: Construction::new(),
            matrix_stack: vec![Matrix4::identity()],
            grid: [40.0, 40.0, 40.0],
            current_group: "default".to_string(),
            defaults: Defaults::default(),
            tolerance,
        }
    }

    // The stack always holds at least the root matrix.
    fn current_matrix(&self) -> Matrix4<f64> {
        self.matrix_stack
            .last()
            .copied()
            .unwrap_or_else(Matrix4::identity)
    }

    /// Saves the current transformation state; restore it with [`Factory::pop`].
    pub fn push(&mut self) -> Result<()> {
        if self.matrix_stack.len() >= MAX_STACK_DEPTH {
            return Err(Error::StackOverflow);
        }

        let top = self.current_matrix();
        self.matrix_stack.push(top);
        Ok(())
    }

    /// Restores the previously saved transformation state.
    pub fn pop(&mut self) -> Result<()> {
        if self.matrix_stack.len() == 1 {
            return Err(Error::StackUnderflow);
        }

        self.matrix_stack.pop();
        Ok(())
    }

    /// Drops all applied transformations.
    pub fn reset_matrix(&mut self) {
        self.matrix_stack = vec![Matrix4::identity()];
    }

    /// Sets the grid distances for [`Factory::move_grid`].
    pub fn set_grid(&mut self, x: f64, y: f64, z: f64) {
        self.grid = [x, y, z];
    }

    /// Moves the coordinate system by `[x, y, z]` world units.
    pub fn move_by(&mut self, x: f64, y: f64, z: f64) {
        let translation = Matrix4::new_translation(&Vector3::new(x, y, z));
        if let Some(current) = self.matrix_stack.last_mut() {
            *current *= translation;
        }
    }

    /// Moves the coordinate system by `[x, y, z]` grid units.
    pub fn move_grid(&mut self, x: f64, y: f64, z: f64) {
        self.move_by(x * self.grid[0], y * self.grid[1], z * self.grid[2]);
    }

    /// All parts created after this are assigned to `name`.
    pub fn group(&mut self, name: &str) {
        self.current_group = name.to_string();
    }

    /// Merges `options` into the bar defaults and returns the result.
    pub fn defaults_bar(&mut self, options: BarOptions) -> &BarOptions {
        self.defaults.bar = options.merged_over(&self.defaults.bar);
        &self.defaults.bar
    }

    /// Merges `options` into the panel defaults and returns the result.
    pub fn defaults_panel(&mut self, options: PanelOptions) -> &PanelOptions {
        self.defaults.panel = options.merged_over(&self.defaults.panel);
        &self.defaults.panel
    }

    /// Merges `options` into the marker defaults and returns the result.
    pub fn defaults_marker(&mut self, options: MarkerOptions) -> &MarkerOptions {
        self.defaults.marker = options.merged_over(&self.defaults.marker);
        &self.defaults.marker
    }

    /// Merges `settings` into the join defaults and returns the result.
    pub fn defaults_join(&mut self, settings: JoinSettings) -> &JoinOptions {
        self.defaults.join = settings.resolved_over(&self.defaults.join);
        &self.defaults.join
    }

    fn transformed(&self, position: Option<[f64; 3]>) -> Point3<f64> {
        let [x, y, z] = position.unwrap_or([0.0, 0.0, 0.0]);
        self.current_matrix().transform_point(&Point3::new(x, y, z))
    }

    /// Makes a new bar and adds it to the construction.
    pub fn bar(&mut self, options: BarOptions) -> Result<PartKey> {
        let opts = options.merged_over(&self.defaults.bar);

        let mut axis = opts.axis.unwrap_or_default();
        let raw_length = opts.length.unwrap_or(100.0);
        if raw_length < 0.0 {
            axis = axis.negated();
        }

        let length = raw_length.abs();
        let size = opts.size.unwrap_or([40.0, 40.0]);

        let mut bar = Bar::new(length, size);

        if let Some(to) = opts.to {
            let [fx, fy, fz] = opts.position.unwrap_or([0.0, 0.0, 0.0]);
            let [tx, ty, tz] = to;
            bar = Bar::between_two_points(
                Point3::new(fx, fy, fz),
                Point3::new(tx, ty, tz),
                size,
            );
        }

        // +z keeps the pose rotation untouched, so bars built between two
        // points keep their computed orientation.
        if axis != Axis::PosZ {
            bar.pose.rotation = axis.rotation();
        }
        bar.pose.position = self.transformed(opts.position);
        bar.group = self.current_group.clone();
        bar.debug = opts.debug.unwrap_or(false);

        let key = self.construction.add_bar(bar)?;

        if let Some([at_start, at_end]) = opts.extend {
            if let Some(bar) = self.construction.bar_mut(key) {
                bar.length += at_start + at_end;
                bar.pose.position = bar.point_from_start(-at_start);
            }
        }

        Ok(key)
    }

    /// Makes a bar aligned to the x axis.
    pub fn bar_x(&mut self, mut options: BarOptions) -> Result<PartKey> {
        options.axis = Some(Axis::PosX);
        self.bar(options)
    }

    /// Makes a bar aligned to the y axis.
    pub fn bar_y(&mut self, mut options: BarOptions) -> Result<PartKey> {
        options.axis = Some(Axis::PosY);
        self.bar(options)
    }

    /// Makes a bar aligned to the z axis.
    pub fn bar_z(&mut self, mut options: BarOptions) -> Result<PartKey> {
        options.axis = Some(Axis::PosZ);
        self.bar(options)
    }

    /// Makes a new panel and adds it to the construction.
    pub fn panel(&mut self, options: PanelOptions) -> Result<PartKey> {
        let opts = options.merged_over(&self.defaults.panel);

        let mut axis = opts.axis.unwrap_or_default();
        let raw_thickness = opts.thickness.unwrap_or(12.0);
        if raw_thickness < 0.0 {
            axis = axis.negated();
        }

        let mut panel = Panel::new(raw_thickness.abs(), opts.size.unwrap_or([100.0, 100.0]));
        panel.pose.rotation = axis.rotation();
        panel.pose.position = self.transformed(opts.position);
        panel.group = self.current_group.clone();
        panel.debug = opts.debug.unwrap_or(false);

        Ok(self.construction.add_panel(panel)?)
    }

    /// Makes a new marker and adds it to the construction.
    pub fn marker(&mut self, options: MarkerOptions) -> Result<PartKey> {
        let opts = options.merged_over(&self.defaults.marker);

        let mut marker = Marker::new(opts.radius.unwrap_or(5.0), opts.color);
        marker.pose.rotation = opts.axis.unwrap_or_default().rotation();
        marker.pose.position = self.transformed(opts.position);
        marker.group = self.current_group.clone();
        marker.debug = opts.debug.unwrap_or(false);

        Ok(self.construction.add_marker(marker)?)
    }

    /// Joins the given bars, resolving `settings` against the join defaults.
    pub fn join(&mut self, bars: &[PartKey], settings: &JoinSettings) {
        let options = settings.resolved_over(&self.defaults.join);
        debug!(bars = bars.len(), "factory: joining bars");
        stabwerk_joint::join(&mut self.construction, bars, &options, &self.tolerance);
    }

    /// Joins all bars created so far.
    pub fn join_all(&mut self, settings: &JoinSettings) {
        let bars = self.construction.bar_keys();
        self.join(&bars, settings);
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bar_uses_defaults() {
        let mut factory = Factory::new();
        let key = factory.bar(BarOptions::default()).unwrap();

        let bar = factory.construction.bar(key).unwrap();
        assert_relative_eq!(bar.length, 100.0);
        assert_eq!(bar.size, [40.0, 40.0]);
        assert_eq!(bar.group, "default");
        assert_relative_eq!(bar.end(), Point3::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn negative_length_flips_the_axis() {
        let mut factory = Factory::new();
        let key = factory
            .bar_x(BarOptions {
                length: Some(-200.0),
                ..Default::default()
            })
            .unwrap();

        let bar = factory.construction.bar(key).unwrap();
        assert_relative_eq!(bar.length, 200.0);
        assert_relative_eq!(bar.end(), Point3::new(-200.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn translations_compose_through_the_stack() {
        let mut factory = Factory::new();
        factory.move_by(100.0, 0.0, 0.0);
        factory.push().unwrap();
        factory.move_by(0.0, 50.0, 0.0);

        let inner = factory.bar(BarOptions::default()).unwrap();
        factory.pop().unwrap();
        let outer = factory.bar(BarOptions::default()).unwrap();

        assert_relative_eq!(
            factory.construction.bar(inner).unwrap().start(),
            Point3::new(100.0, 50.0, 0.0)
        );
        assert_relative_eq!(
            factory.construction.bar(outer).unwrap().start(),
            Point3::new(100.0, 0.0, 0.0)
        );
    }

    #[test]
    fn move_grid_multiplies_by_grid_units() {
        let mut factory = Factory::new();
        factory.set_grid(40.0, 40.0, 80.0);
        factory.move_grid(1.0, 0.0, 2.0);

        let key = factory.bar(BarOptions::default()).unwrap();
        assert_relative_eq!(
            factory.construction.bar(key).unwrap().start(),
            Point3::new(40.0, 0.0, 160.0)
        );
    }

    #[test]
    fn unbalanced_stack_is_an_error() {
        let mut factory = Factory::new();
        assert!(matches!(factory.pop(), Err(Error::StackUnderflow)));

        for _ in 0..MAX_STACK_DEPTH - 1 {
            factory.push().unwrap();
        }
        assert!(matches!(factory.push(), Err(Error::StackOverflow)));
    }

    #[test]
    fn bar_between_two_points() {
        let mut factory = Factory::new();
        let key = factory
            .bar(BarOptions {
                position: Some([0.0, 0.0, 0.0]),
                to: Some([0.0, 300.0, 0.0]),
                ..Default::default()
            })
            .unwrap();

        let bar = factory.construction.bar(key).unwrap();
        assert_relative_eq!(bar.length, 300.0);
        assert_relative_eq!(bar.end(), Point3::new(0.0, 300.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn extend_lengthens_both_ends() {
        let mut factory = Factory::new();
        let key = factory
            .bar(BarOptions {
                length: Some(100.0),
                extend: Some([10.0, 20.0]),
                ..Default::default()
            })
            .unwrap();

        let bar = factory.construction.bar(key).unwrap();
        assert_relative_eq!(bar.length, 130.0);
        assert_relative_eq!(bar.start(), Point3::new(0.0, 0.0, -10.0), epsilon = 1e-9);
        assert_relative_eq!(bar.end(), Point3::new(0.0, 0.0, 120.0), epsilon = 1e-9);
    }

    #[test]
    fn defaults_merge_and_apply() {
        let mut factory = Factory::new();
        factory.defaults_bar(BarOptions {
            size: Some([30.0, 50.0]),
            ..Default::default()
        });

        let key = factory.bar(BarOptions::default()).unwrap();
        assert_eq!(factory.construction.bar(key).unwrap().size, [30.0, 50.0]);
    }

    #[test]
    fn negative_panel_thickness_flips_the_axis() {
        let mut factory = Factory::new();
        let key = factory
            .panel(PanelOptions {
                thickness: Some(-12.0),
                ..Default::default()
            })
            .unwrap();

        let (_, panel) = factory
            .construction
            .panels()
            .find(|(k, _)| *k == key)
            .unwrap();
        assert_relative_eq!(panel.thickness, 12.0);
        assert_relative_eq!(
            panel.pose.rotation * Vector3::z(),
            Vector3::new(0.0, 0.0, -1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn join_all_connects_created_bars() {
        let mut factory = Factory::new();

        factory
            .bar_x(BarOptions {
                length: Some(300.0),
                ..Default::default()
            })
            .unwrap();
        factory
            .bar_y(BarOptions {
                position: Some([150.0, -100.0, 40.0]),
                length: Some(300.0),
                ..Default::default()
            })
            .unwrap();

        factory.join_all(&JoinSettings::default());

        assert_eq!(factory.construction.connectors().count(), 1);
    }
}
