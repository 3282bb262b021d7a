//! Enumeration types for the Galaxy ledger contract suite.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record kinds
// ---------------------------------------------------------------------------

/// A record kind managed by the keyed-state engine.
///
/// Each kind has its own independent ID namespace: identifiers are unique
/// within a kind, not across kinds. The five kinds map one-to-one onto the
/// record structs in [`crate::records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A simulated civilization with growth mechanics.
    Civilization,
    /// A transferable cosmic event token.
    EventToken,
    /// A write-once astronomical observation.
    AstronomicalDatum,
    /// A write-once physics model with its parameter vector.
    PhysicsModel,
    /// A marketplace listing with escrow/expiration semantics.
    Listing,
}

impl RecordKind {
    /// Return a stable lowercase label for logs and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Civilization => "civilization",
            Self::EventToken => "event-token",
            Self::AstronomicalDatum => "astronomical-datum",
            Self::PhysicsModel => "physics-model",
            Self::Listing => "listing",
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
