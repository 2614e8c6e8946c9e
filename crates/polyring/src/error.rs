//! Error type shared by the ring and the ring-level predicates.

use thiserror::Error;

use crate::ring::VertexId;

/// Failures reported by [`crate::Ring`] operations.
///
/// Handles are checked on every access, so misuse that a pointer-linked ring
/// would leave undefined (foreign or removed vertices) surfaces here instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// Vertex storage could not be reserved; the ring was left unmodified.
    #[error("failed to allocate vertex storage")]
    Allocation,

    /// The handle belongs to another ring, was removed, or its slot was reused.
    #[error("invalid vertex handle {vertex:?}: {reason}")]
    InvalidVertexHandle {
        vertex: VertexId,
        reason: HandleFault,
    },

    /// Link structure failed a consistency check (see [`crate::Ring::validate`]).
    #[error("inconsistent ring: {0}")]
    Inconsistent(String),
}

/// Why a [`VertexId`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HandleFault {
    #[error("vertex belongs to another ring")]
    ForeignRing,
    #[error("slot index out of range")]
    OutOfRange,
    #[error("vertex was removed")]
    Removed,
}

impl From<std::collections::TryReserveError> for RingError {
    fn from(_: std::collections::TryReserveError) -> Self {
        RingError::Allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ring;
    use nalgebra::point;

    #[test]
    fn messages_name_the_fault() {
        assert_eq!(HandleFault::Removed.to_string(), "vertex was removed");
        let mut r: Ring = Ring::new();
        let v = r.push(point![0, 0]).unwrap();
        r.remove(v).unwrap();
        let msg = r.point(v).unwrap_err().to_string();
        assert!(msg.starts_with("invalid vertex handle"), "{msg}");
        assert!(msg.ends_with("vertex was removed"), "{msg}");
        assert_eq!(
            RingError::Allocation.to_string(),
            "failed to allocate vertex storage"
        );
    }
}
