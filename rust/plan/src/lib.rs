// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Stabwerk Plan
//!
//! Reporting over a finished construction: which bars to buy, how to cut
//! them, where to drill. Consumes the construction after joining; the bars
//! already carry their holes. Grouping identical bars relies on the
//! canonicalization in `stabwerk-model` ([`Bar::normalize`] /
//! [`Bar::equals`]).
//!
//! [`Bar::normalize`]: stabwerk_model::Bar::normalize
//! [`Bar::equals`]: stabwerk_model::Bar::equals

pub mod assembly;
pub mod cut_list;
pub mod drill_list;
pub mod helpers;

pub use assembly::assign_assembly_names;
pub use cut_list::{cut_list, CutItem, CutPieces};
pub use drill_list::drill_pieces;
