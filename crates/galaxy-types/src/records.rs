//! Record structs for the five entity kinds.
//!
//! Every record is an immutable value snapshot: mutations replace the whole
//! record in the store, never a single field in place. The record's ID is
//! the key it is stored under and is not duplicated inside the struct.
//!
//! Quantities that are not integer tick math use [`Decimal`] -- prices and
//! observation values are never floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::principal::Principal;

// ---------------------------------------------------------------------------
// Civilization
// ---------------------------------------------------------------------------

/// A simulated civilization with deterministic growth mechanics.
///
/// Technology level, population, and resources are monotone non-decreasing
/// under the growth rule. `last_update` records the most recently applied
/// elapsed-tick delta, not an accumulated clock; cumulative time belongs
/// to the external sequencer, not to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Civilization {
    /// Principal that owns this civilization.
    pub owner: Principal,
    /// Display name chosen at creation.
    pub name: String,
    /// Technology level, starting at 1 and only ever increasing.
    pub technology_level: u64,
    /// Current population count.
    pub population: u64,
    /// Stockpiled resources.
    pub resources: u64,
    /// The elapsed-tick delta applied by the most recent update.
    pub last_update: u64,
}

// ---------------------------------------------------------------------------
// EventToken
// ---------------------------------------------------------------------------

/// A transferable token commemorating a cosmic event.
///
/// Exactly one owner at a time; the URI and event type are fixed at mint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventToken {
    /// Current owner. Reassigned on transfer.
    pub owner: Principal,
    /// Metadata URI describing the event.
    pub uri: String,
    /// Category of the commemorated event (e.g. "Supernova").
    pub event_type: String,
}

// ---------------------------------------------------------------------------
// Registry records (write-once)
// ---------------------------------------------------------------------------

/// A write-once astronomical observation.
///
/// No update operation exists for this kind: once added, the record is
/// append-only history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomicalDatum {
    /// Category of the observation (e.g. "Star Luminosity").
    pub data_type: String,
    /// Observed value.
    pub value: Decimal,
    /// Tick at which the datum was registered.
    pub timestamp: u64,
}

/// A write-once physics model with its parameter vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsModel {
    /// Model name (e.g. "Dark Matter Distribution").
    pub model_name: String,
    /// Ordered model parameters.
    pub parameters: Vec<Decimal>,
    /// Tick at which the model was registered.
    pub timestamp: u64,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A marketplace listing.
///
/// Exists only between creation and resolution (purchase, cancel, or
/// expiration); deletion is terminal. A listing with `expiration == 0` is
/// expired -- expiry is detected lazily at purchase time, never swept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Principal that created the listing and may cancel it.
    pub seller: Principal,
    /// Kind of item being sold (e.g. "Starship").
    pub item_type: String,
    /// Asking price, settled by the external value-transfer ledger.
    pub price: Decimal,
    /// Remaining validity horizon in ticks; 0 means expired.
    pub expiration: u64,
}
