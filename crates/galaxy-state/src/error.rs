//! Error types for the `galaxy-state` crate.
//!
//! All fallible operations in this crate return [`StateError`] through the
//! standard [`Result`] type alias.

use galaxy_types::RecordKind;

/// Errors that can occur during keyed-state operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// No record exists under the given ID in the kind's namespace.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The namespace that was queried.
        kind: RecordKind,
        /// The missing identifier.
        id: u64,
    },

    /// The identifier counter for a namespace would overflow.
    ///
    /// Unreachable in practice: it requires 2^64 issuances in one namespace.
    #[error("identifier space exhausted for {kind}")]
    IdExhausted {
        /// The exhausted namespace.
        kind: RecordKind,
    },
}
