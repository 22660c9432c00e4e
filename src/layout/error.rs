//! Error types for the ring layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
///
/// Both variants are configuration problems the caller reports to the user;
/// no placement is produced when either is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The object list was empty
    #[error("No objects selected.")]
    NoObjects,

    /// The skip pattern cannot place anything
    #[error("Skip list is empty or invalid: {reason}")]
    InvalidSkipPattern { reason: String },
}

impl LayoutError {
    /// Create an invalid skip pattern error
    pub fn invalid_pattern(reason: impl Into<String>) -> Self {
        Self::InvalidSkipPattern {
            reason: reason.into(),
        }
    }
}
