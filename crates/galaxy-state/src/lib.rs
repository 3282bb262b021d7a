//! Deterministic keyed-state engine for the Galaxy ledger contract suite.
//!
//! This crate implements the state substrate shared by all four contracts:
//! a monotonically increasing identifier space mapped to owned, mutable
//! records. It knows nothing about access control or lifecycle rules --
//! those compose on top in `galaxy-contracts`.
//!
//! # Architecture
//!
//! - [`issuer`] -- [`IdentifierIssuer`]: strictly increasing per-kind counters.
//! - [`store`] -- [`RecordStore`]: keyed mapping with not-found-signalling reads.
//! - [`namespace`] -- [`Namespace`]: issuer + store behind a typed ID, the
//!   one generic engine instantiated per record kind.
//!
//! # Determinism
//!
//! The engine holds no clocks, no randomness, and no global state. Every
//! operation is a pure function of the engine value and its arguments, so a
//! sequence of operations replays to an identical state. The engine is
//! single-threaded and run-to-completion; hosts that need concurrency put a
//! mutual-exclusion boundary around each namespace.

pub mod error;
pub mod issuer;
pub mod namespace;
pub mod store;

// Re-export primary types at crate root.
pub use error::StateError;
pub use issuer::IdentifierIssuer;
pub use namespace::Namespace;
pub use store::RecordStore;
