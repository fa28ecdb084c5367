// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The four lateral sides of a bar.
//!
//! Sides are indexed 0..3 (N, E, S, W) with fixed local unit normals that get
//! rotated by the bar's pose. All side arithmetic is modulo 4; the opposite
//! side is two steps around.

use nalgebra::Vector3;

/// One of the four lateral faces of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarSide {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl BarSide {
    /// All sides in scan order. Detection iterates this exact order; the
    /// first matching side wins.
    pub const ALL: [BarSide; 4] = [
        BarSide::North,
        BarSide::East,
        BarSide::South,
        BarSide::West,
    ];

    /// The side index, 0..3.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side for an index, taken modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The opposing face: `(side + 2) mod 4`.
    pub fn opposite(self) -> Self {
        self.rotated_by(2)
    }

    /// The side `steps` further around the cross-section.
    pub fn rotated_by(self, steps: usize) -> Self {
        Self::from_index(self.index() + steps)
    }

    /// Unit normal of this side in bar-local space.
    pub fn local_normal(self) -> Vector3<f64> {
        match self {
            BarSide::North => Vector3::new(1.0, 0.0, 0.0),
            BarSide::East => Vector3::new(0.0, 1.0, 0.0),
            BarSide::South => Vector3::new(-1.0, 0.0, 0.0),
            BarSide::West => Vector3::new(0.0, -1.0, 0.0),
        }
    }
}
