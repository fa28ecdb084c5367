// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Stabwerk Factory
//!
//! The convenience API user code builds constructions with.
//!
//! A [`Factory`] keeps a transform (matrix) stack, a grid, a current group
//! and per-part-type defaults. Parts are created from option structs whose
//! unset fields fall back to the defaults; positions go through the current
//! matrix. [`Factory::join`] and [`Factory::join_all`] hand the collected
//! bars to the joint engine in `stabwerk-joint`.

pub mod axis;
pub mod error;
pub mod factory;
pub mod options;

pub use axis::Axis;
pub use error::{Error, Result};
pub use factory::Factory;
pub use options::{BarOptions, JoinSettings, MarkerOptions, PanelOptions};
