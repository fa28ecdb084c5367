// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the factory.

/// Result type alias for factory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a factory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transform stack has a fixed depth limit to catch unbalanced
    /// push/pop pairs in user code.
    #[error("push() called too often. Is it possible that you forgot a pop()?")]
    StackOverflow,

    /// `pop` was called on the root transform.
    #[error("pop() called too often. Is it possible that you forgot a push()?")]
    StackUnderflow,

    /// A part had degenerate dimensions.
    #[error(transparent)]
    Model(#[from] stabwerk_model::Error),
}
