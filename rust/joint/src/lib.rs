// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Stabwerk Joint
//!
//! The bar-connection geometry engine.
//!
//! Given the bars of a construction, [`join`] discovers where they physically
//! touch and synthesizes the hardware: candidate pairs are pruned by bounding
//! box, each surviving pair is tested for a butt contact (one bar's end flush
//! on another's side) and an overlap contact (two sides facing and touching),
//! overlaps sharing a bar are chained into single runs, and finally connector
//! parts and drill holes are appended to the construction.
//!
//! All touching/parallelism decisions go through one [`Tolerance`] value; the
//! engine is synchronous and deterministic for a given input order.
//!
//! [`Tolerance`]: stabwerk_model::Tolerance

pub mod candidates;
pub mod chain;
pub mod detect;
pub mod join;
pub mod math;

pub use candidates::find_candidate_pairs;
pub use chain::group_overlaps;
pub use detect::{find_butt_connection, find_overlap_connection, ButtConnection, OverlapConnection};
pub use join::{join, JoinOptions};
