//! Custom error types for fgranges buffer operations.

use thiserror::Error;

/// Result type alias for fgranges operations
pub type Result<T> = std::result::Result<T, BufferError>;

/// Error type for fgranges buffer operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Requested or computed capacity exceeds what the element type can address
    #[error("Capacity {requested} exceeds the maximum of {max} elements")]
    Capacity {
        /// The capacity that was asked for
        requested: usize,
        /// Maximum representable element count
        max: usize,
    },

    /// Position outside the bound required by the operation
    #[error("Index {index} out of bounds for {operation} on buffer of length {len}")]
    Index {
        /// The offending position
        index: usize,
        /// Live length of the buffer at the time of the call
        len: usize,
        /// Name of the operation (e.g. "insert_at")
        operation: &'static str,
    },

    /// Nested-buffer operation across buffers of different element kinds
    #[error("Element kind mismatch: expected {expected} buffer, found {found} buffer")]
    TypeMismatch {
        /// Kind required by the operation
        expected: &'static str,
        /// Kind that was supplied
        found: &'static str,
    },

    /// Structural inconsistency, such as paired buffers with mismatched lengths
    #[error("Internal invariant violated: {reason}")]
    InvariantViolation {
        /// What was observed
        reason: String,
    },
}

impl BufferError {
    /// Build a [`BufferError::Index`] error.
    #[must_use]
    pub fn index(index: usize, len: usize, operation: &'static str) -> Self {
        Self::Index { index, len, operation }
    }

    /// Build a [`BufferError::InvariantViolation`], logging it at error level.
    ///
    /// Invariant violations indicate a defect in calling code, so they are always
    /// logged where they are detected.
    #[must_use]
    pub fn invariant(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::error!("Invariant violation: {reason}");
        Self::InvariantViolation { reason }
    }

    /// Whether this error is non-recoverable.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

/// Check that two paired operands have the same live length.
pub(crate) fn ensure_same_len(what: &str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(BufferError::invariant(format!("{what}: lengths differ ({left} != {right})")))
    }
}
