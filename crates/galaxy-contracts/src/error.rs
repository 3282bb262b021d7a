//! Caller-facing error taxonomy shared by all four contract facades.
//!
//! Every operation outcome is a [`Result`] whose error side carries one of
//! the expected, recoverable conditions: the referenced ID does not exist,
//! the caller fails the operation's access predicate, or the record is not
//! in a state that permits the operation. These map onto the fixed wire
//! codes of the embedding protocol (404 / 403 / 400) and are never raised
//! as panics -- the engine targets a no-rollback execution environment
//! where every operation either fully applies or leaves state untouched.

use galaxy_types::RecordKind;

use galaxy_state::StateError;

/// Result alias used throughout the contract facades.
pub type ContractResult<T> = Result<T, ContractError>;

/// An expected, recoverable, caller-facing operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// The referenced ID does not exist in its kind's namespace
    /// (never issued, or already deleted).
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The namespace that was queried.
        kind: RecordKind,
        /// The missing identifier.
        id: u64,
    },

    /// The caller fails the operation's access predicate.
    #[error("caller is not permitted to perform this operation")]
    Forbidden,

    /// The record exists but is not in a state that permits the operation
    /// (an expired listing).
    #[error("{kind} {id} is expired")]
    Expired {
        /// The namespace of the expired record.
        kind: RecordKind,
        /// The expired identifier.
        id: u64,
    },

    /// An internal condition that should not occur in normal operation
    /// (identifier space exhaustion).
    #[error("internal contract error: {0}")]
    Internal(&'static str),
}

impl ContractError {
    /// Return the fixed wire code for this error.
    ///
    /// Codes are part of the external protocol and never change:
    /// 404 not found, 403 forbidden, 400 invalid state, 500 internal.
    pub const fn code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Forbidden => 403,
            Self::Expired { .. } => 400,
            Self::Internal(_) => 500,
        }
    }
}

impl From<StateError> for ContractError {
    fn from(err: StateError) -> Self {
        match err {
            StateError::NotFound { kind, id } => Self::NotFound { kind, id },
            StateError::IdExhausted { .. } => Self::Internal("identifier space exhausted"),
        }
    }
}
