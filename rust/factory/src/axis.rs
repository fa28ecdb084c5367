// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Main-axis alignment for created parts.

use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

/// The world axis a part's local +z axis is aligned with on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    PosX,
    PosY,
    #[default]
    PosZ,
    NegX,
    NegY,
    NegZ,
}

impl Axis {
    /// The opposite direction. Used when a negative length or thickness
    /// flips a part around.
    pub fn negated(self) -> Self {
        match self {
            Axis::PosX => Axis::NegX,
            Axis::PosY => Axis::NegY,
            Axis::PosZ => Axis::NegZ,
            Axis::NegX => Axis::PosX,
            Axis::NegY => Axis::PosY,
            Axis::NegZ => Axis::PosZ,
        }
    }

    /// Rotation carrying the local +z axis onto this world axis.
    pub fn rotation(self) -> UnitQuaternion<f64> {
        match self {
            Axis::PosX => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
            Axis::PosY => UnitQuaternion::from_axis_angle(
                &nalgebra::Unit::new_normalize(Vector3::new(-1.0, 0.0, 0.0)),
                FRAC_PI_2,
            ),
            Axis::PosZ => UnitQuaternion::identity(),
            Axis::NegX => UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_2),
            Axis::NegY => UnitQuaternion::from_axis_angle(
                &nalgebra::Unit::new_normalize(Vector3::new(-1.0, 0.0, 0.0)),
                -FRAC_PI_2,
            ),
            Axis::NegZ => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotations_carry_z_onto_the_axis() {
        let cases = [
            (Axis::PosX, Vector3::new(1.0, 0.0, 0.0)),
            (Axis::PosY, Vector3::new(0.0, 1.0, 0.0)),
            (Axis::PosZ, Vector3::new(0.0, 0.0, 1.0)),
            (Axis::NegX, Vector3::new(-1.0, 0.0, 0.0)),
            (Axis::NegY, Vector3::new(0.0, -1.0, 0.0)),
            (Axis::NegZ, Vector3::new(0.0, 0.0, -1.0)),
        ];

        for (axis, expected) in cases {
            assert_relative_eq!(axis.rotation() * Vector3::z(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn negation_is_an_involution() {
        for axis in [Axis::PosX, Axis::PosY, Axis::PosZ] {
            assert_eq!(axis.negated().negated(), axis);
        }
    }
}
