//! Errors produced by this crate.
//!
//! Looking up a missing value, asking for an out of range rank, or inserting a rejected
//! duplicate are ordinary outcomes reported through `bool`/`Option`. The only failure is the
//! output sink used when printing a tree.

use std::io;

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the tree's contents to its output sink failed.
    #[error("failed to write tree contents: {0}")]
    Io(#[from] io::Error),
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
