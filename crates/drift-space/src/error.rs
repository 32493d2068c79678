//! Error types for space mutation.

use std::error::Error;
use std::fmt;

use drift_core::{ObjectId, PosKey};

/// Errors from targeted space mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The referenced object is not in this space.
    UnknownObject {
        /// The missing ID.
        id: ObjectId,
    },
    /// The referenced object exists but is stored at a different
    /// position than the one named by the caller.
    NotAtPosition {
        /// The object in question.
        id: ObjectId,
        /// Where the caller expected it.
        expected: PosKey,
        /// Where it actually is.
        actual: PosKey,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject { id } => write!(f, "object {id} is not in this space"),
            Self::NotAtPosition {
                id,
                expected,
                actual,
            } => write!(f, "object {id} is stored at {actual}, not {expected}"),
        }
    }
}

impl Error for SpaceError {}
