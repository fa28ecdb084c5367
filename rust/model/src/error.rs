// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the part model.
//!
//! Degenerate parts are rejected when they enter the arena; the joint engine
//! assumes every bar it sees is well-formed.

use crate::construction::PartKey;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or restoring a construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A bar must have a strictly positive length.
    #[error("bar length must be positive, got {0}")]
    BarLength(f64),

    /// Both cross-section dimensions of a bar must be strictly positive.
    #[error("bar cross-section must be positive, got {0}x{1}")]
    BarSize(f64, f64),

    /// A panel must have a strictly positive thickness.
    #[error("panel thickness must be positive, got {0}")]
    PanelThickness(f64),

    /// Both panel dimensions must be strictly positive.
    #[error("panel size must be positive, got {0}x{1}")]
    PanelSize(f64, f64),

    /// A marker must have a strictly positive radius.
    #[error("marker radius must be positive, got {0}")]
    MarkerRadius(f64),

    /// A connector joins at least two parts.
    #[error("connector must join at least two parts, got {0}")]
    ConnectorArity(usize),

    /// A referenced part was not found in the arena.
    #[error("part not found: {0:?}")]
    PartNotFound(PartKey),

    /// A snapshot referenced a part index that has not been restored yet.
    #[error("snapshot references unknown part index {0}")]
    SnapshotIndex(usize),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
