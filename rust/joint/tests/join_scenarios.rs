// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end joining scenarios: detection through synthesis against a
//! mutable construction.

use approx::assert_relative_eq;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::f64::consts::FRAC_PI_2;

use stabwerk_joint::{join, JoinOptions};
use stabwerk_model::{Bar, BarSide, ConnectorKind, Construction, PartKey, Tolerance};

fn x_aligned(length: f64, position: Point3<f64>) -> Bar {
    let mut bar = Bar::new(length, [40.0, 40.0]);
    bar.pose.rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2);
    bar.pose.position = position;
    bar
}

fn y_aligned(length: f64, position: Point3<f64>) -> Bar {
    let mut bar = Bar::new(length, [40.0, 40.0]);
    bar.pose.rotation = UnitQuaternion::from_axis_angle(
        &nalgebra::Unit::new_normalize(Vector3::new(-1.0, 0.0, 0.0)),
        FRAC_PI_2,
    );
    bar.pose.position = position;
    bar
}

fn hole_count(construction: &Construction, key: PartKey) -> usize {
    construction.bar(key).unwrap().holes.len()
}

/// Three crossed bars stacked at the same station: one bolt through all
/// three, so the two pairwise overlaps must collapse into one connector.
#[test]
fn stacked_crossing_bars_get_one_connector() {
    let tol = Tolerance::default();
    let mut construction = Construction::new();

    let b1 = construction
        .add_bar(x_aligned(300.0, Point3::new(0.0, 0.0, 0.0)))
        .unwrap();
    let b2 = construction
        .add_bar(y_aligned(300.0, Point3::new(150.0, -100.0, 40.0)))
        .unwrap();
    let b3 = construction
        .add_bar(x_aligned(240.0, Point3::new(30.0, 0.0, 80.0)))
        .unwrap();

    join(
        &mut construction,
        &[b1, b2, b3],
        &JoinOptions::default(),
        &tol,
    );

    let connectors: Vec<_> = construction.connectors().collect();
    assert_eq!(connectors.len(), 1);

    let (_, connector) = connectors[0];
    assert_eq!(connector.kind, ConnectorKind::Overlap);
    assert_eq!(connector.parts, vec![b1, b2, b3]);
    assert_relative_eq!(connector.length, 120.0, epsilon = 1e-9);
    assert_relative_eq!(
        connector.pose.position,
        Point3::new(150.0, 0.0, -20.0),
        epsilon = 1e-9
    );

    // One through-hole per bar, at the crossing station.
    assert_eq!(hole_count(&construction, b1), 1);
    assert_eq!(hole_count(&construction, b2), 1);
    assert_eq!(hole_count(&construction, b3), 1);

    let hole_b1 = &construction.bar(b1).unwrap().holes[0];
    assert_relative_eq!(hole_b1.position, 150.0, epsilon = 1e-9);
    assert_eq!(hole_b1.side, BarSide::North);
    assert_relative_eq!(hole_b1.diameter, 10.0);
    assert!(hole_b1.is_through());

    let hole_b2 = &construction.bar(b2).unwrap().holes[0];
    assert_relative_eq!(hole_b2.position, 100.0, epsilon = 1e-9);
    assert_eq!(hole_b2.side, BarSide::East);

    let hole_b3 = &construction.bar(b3).unwrap().holes[0];
    assert_relative_eq!(hole_b3.position, 120.0, epsilon = 1e-9);
    assert_eq!(hole_b3.side, BarSide::North);
}

/// The same pile, but the top bar crosses the middle one at a different
/// station: the contacts no longer chain, so two connectors are built and
/// the shared bar is drilled twice.
#[test]
fn offset_crossings_get_separate_connectors() {
    let tol = Tolerance::default();
    let mut construction = Construction::new();

    let b1 = construction
        .add_bar(x_aligned(300.0, Point3::new(0.0, 0.0, 0.0)))
        .unwrap();
    let b2 = construction
        .add_bar(y_aligned(300.0, Point3::new(150.0, -100.0, 40.0)))
        .unwrap();
    let b3 = construction
        .add_bar(x_aligned(240.0, Point3::new(30.0, 40.0, 80.0)))
        .unwrap();

    join(
        &mut construction,
        &[b1, b2, b3],
        &JoinOptions::default(),
        &tol,
    );

    let connectors: Vec<_> = construction.connectors().collect();
    assert_eq!(connectors.len(), 2);
    for (_, connector) in &connectors {
        assert_eq!(connector.kind, ConnectorKind::Overlap);
        assert_eq!(connector.parts.len(), 2);
        assert_relative_eq!(connector.length, 80.0, epsilon = 1e-9);
    }

    assert_eq!(hole_count(&construction, b1), 1);
    assert_eq!(hole_count(&construction, b2), 2);
    assert_eq!(hole_count(&construction, b3), 1);
}

/// A bar standing with its end flush on another bar's side gets a butt
/// connector, tried for both pair orderings but reported only once.
#[test]
fn butt_contact_synthesizes_one_connector_and_no_holes() {
    let tol = Tolerance::default();
    let mut construction = Construction::new();

    let mut upright = Bar::new(500.0, [40.0, 40.0]);
    upright.pose.position = Point3::new(100.0, 50.0, 0.0);
    let upright = construction.add_bar(upright).unwrap();

    let crossbar = construction
        .add_bar(x_aligned(300.0, Point3::new(80.0, 50.0, 520.0)))
        .unwrap();

    join(
        &mut construction,
        &[upright, crossbar],
        &JoinOptions::default(),
        &tol,
    );

    let connectors: Vec<_> = construction.connectors().collect();
    assert_eq!(connectors.len(), 1);

    let (_, connector) = connectors[0];
    assert_eq!(connector.kind, ConnectorKind::Butt);
    assert_eq!(connector.parts, vec![upright, crossbar]);
    assert_relative_eq!(connector.length, 80.0);
    assert_relative_eq!(
        connector.pose.position,
        Point3::new(100.0, 50.0, 540.0),
        epsilon = 1e-9
    );

    // Oriented back down along the touching bar's axis.
    let axis = connector.pose.rotation * Vector3::z();
    assert_relative_eq!(axis, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-9);

    // Butt joints do not get drilled yet.
    assert_eq!(hole_count(&construction, upright), 0);
    assert_eq!(hole_count(&construction, crossbar), 0);
}

/// Bars that touch nothing leave the construction untouched.
#[test]
fn disjoint_bars_produce_nothing() {
    let tol = Tolerance::default();
    let mut construction = Construction::new();

    let a = construction
        .add_bar(x_aligned(300.0, Point3::new(0.0, 0.0, 0.0)))
        .unwrap();
    let b = construction
        .add_bar(y_aligned(300.0, Point3::new(0.0, 0.0, 500.0)))
        .unwrap();

    join(&mut construction, &[a, b], &JoinOptions::default(), &tol);

    assert_eq!(construction.connectors().count(), 0);
    assert_eq!(hole_count(&construction, a), 0);
    assert_eq!(hole_count(&construction, b), 0);
}

/// The hole diameter comes from the join options.
#[test]
fn overlap_hole_diameter_is_configurable() {
    let tol = Tolerance::default();
    let mut construction = Construction::new();

    let b1 = construction
        .add_bar(x_aligned(300.0, Point3::new(0.0, 0.0, 0.0)))
        .unwrap();
    let b2 = construction
        .add_bar(y_aligned(300.0, Point3::new(150.0, -100.0, 40.0)))
        .unwrap();

    let options = JoinOptions {
        overlap_hole_dia: 8.0,
        debug: true,
    };
    join(&mut construction, &[b1, b2], &options, &tol);

    let (_, connector) = construction.connectors().next().unwrap();
    assert!(connector.debug);

    for key in [b1, b2] {
        let bar = construction.bar(key).unwrap();
        assert_eq!(bar.holes.len(), 1);
        assert_relative_eq!(bar.holes[0].diameter, 8.0);
    }
}
