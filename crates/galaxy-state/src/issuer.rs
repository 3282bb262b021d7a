//! Sequential identifier issuance, one counter per record kind.
//!
//! The issuer is the single source of truth for how many records have ever
//! been created in a namespace. The counter starts at 0 and is
//! pre-incremented on issue, so the first ID handed out is 1. IDs are never
//! reused, even after the record they named is deleted.

use galaxy_types::RecordKind;

use crate::error::StateError;

/// A strictly increasing identifier counter for one record kind.
///
/// The counter advances by exactly 1 per [`next`](Self::next) call and is
/// never decremented. The increment is checked: exhausting the `u64` space
/// surfaces as [`StateError::IdExhausted`] rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierIssuer {
    /// The namespace this issuer serves.
    kind: RecordKind,

    /// The most recently issued ID (0 before the first issue).
    last: u64,
}

impl IdentifierIssuer {
    /// Create a fresh issuer for the given kind. The first issued ID is 1.
    pub const fn new(kind: RecordKind) -> Self {
        Self { kind, last: 0 }
    }

    /// Issue the next identifier, advancing the counter by exactly 1.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IdExhausted`] if the counter would exceed
    /// `u64::MAX`.
    pub fn next(&mut self) -> Result<u64, StateError> {
        self.last = self
            .last
            .checked_add(1)
            .ok_or(StateError::IdExhausted { kind: self.kind })?;
        Ok(self.last)
    }

    /// Return the most recently issued ID (0 if none has been issued).
    pub const fn last(&self) -> u64 {
        self.last
    }

    /// Return the namespace this issuer serves.
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }
}
