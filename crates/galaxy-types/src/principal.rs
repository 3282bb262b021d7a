//! The opaque, pre-authenticated caller identity.
//!
//! Wallet address representation and signature verification are external
//! collaborators: by the time an operation reaches the contract suite, the
//! caller has already been authenticated. A [`Principal`] is therefore just
//! an opaque string compared for equality -- ownership checks are attribute
//! comparisons, never cryptographic operations.

use serde::{Deserialize, Serialize};

/// An opaque, already-authenticated caller identity.
///
/// Principals are supplied by the embedding environment and never minted,
/// derived, or validated by the engine itself. Two principals are the same
/// caller exactly when their string forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Wrap an externally supplied identity string.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// Return the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Principal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Principal {
    fn from(identity: &str) -> Self {
        Self(identity.to_owned())
    }
}

impl From<String> for Principal {
    fn from(identity: String) -> Self {
        Self(identity)
    }
}
