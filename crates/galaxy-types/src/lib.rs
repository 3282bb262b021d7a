//! Shared type definitions for the Galaxy ledger contract suite.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace: typed record identifiers, the opaque caller identity, the
//! record-kind enumeration, and the record structs themselves. It contains
//! no logic beyond construction and comparison.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe `u64` wrappers, one per ID namespace
//! - [`principal`] -- The opaque, pre-authenticated caller identity
//! - [`enums`] -- The [`RecordKind`] enumeration
//! - [`records`] -- Record structs for the five entity kinds

pub mod enums;
pub mod ids;
pub mod principal;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use enums::RecordKind;
pub use ids::{CivilizationId, DatumId, EventTokenId, ListingId, ModelId};
pub use principal::Principal;
pub use records::{AstronomicalDatum, Civilization, EventToken, Listing, PhysicsModel};
