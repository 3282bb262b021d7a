//! Type-safe identifier wrappers around sequential record IDs.
//!
//! Every record kind has its own independent ID namespace, so each gets a
//! strongly-typed wrapper to prevent accidental mixing of identifiers at
//! compile time. IDs are dense `u64` values allocated by the identifier
//! issuer, starting at 1 and never reused.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a `u64` record ID with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The first identifier ever issued in this namespace.
            pub const FIRST: Self = Self(1);

            /// Return the raw numeric value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a civilization record.
    CivilizationId
}

define_id! {
    /// Unique identifier for a minted cosmic event token.
    EventTokenId
}

define_id! {
    /// Unique identifier for an astronomical datum in the registry.
    DatumId
}

define_id! {
    /// Unique identifier for a physics model in the registry.
    ModelId
}

define_id! {
    /// Unique identifier for a marketplace listing.
    ListingId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let civ = CivilizationId::FIRST;
        let token = EventTokenId::FIRST;
        // These are different types -- the compiler enforces no mixing.
        assert_eq!(civ.into_inner(), token.into_inner());
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(ListingId::FIRST.into_inner(), 1);
    }

    #[test]
    fn id_roundtrip_u64() {
        let id = DatumId::from(42);
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn id_display_is_plain_number() {
        assert_eq!(ModelId::from(7).to_string(), "7");
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&CivilizationId::from(3)).ok();
        assert_eq!(json.as_deref(), Some("3"));
    }
}
