//! Contract facades for the Galaxy ledger suite.
//!
//! Four simulated ledger contracts -- a civilization-growth simulator, a
//! transferable event token, an administrator-gated data registry, and a
//! marketplace with escrow/expiration -- built on the one generic
//! keyed-state engine from `galaxy-state`. Each facade composes the same
//! pieces: an ID namespace, an access policy, and a lifecycle rule,
//! translating policy and lifecycle outcomes into result-or-error values
//! with fixed wire codes.
//!
//! # Modules
//!
//! - [`config`] -- Typed configuration with YAML loading ([`ContractsConfig`])
//! - [`error`] -- Caller-facing error taxonomy ([`ContractError`])
//! - [`response`] -- Wire-shaped `{ok}/{err}` outcomes ([`ContractResponse`])
//! - [`policy`] -- Pure access predicates (owner, registry owner)
//! - [`growth`] -- The civilization growth rule
//! - [`listing`] -- The listing validity rule
//! - [`civilization`], [`events`], [`registry`], [`market`] -- The facades
//!
//! # Execution model
//!
//! Single-threaded, request-at-a-time, run-to-completion: every operation
//! executes atomically with respect to all others and either fully applies
//! or leaves state untouched. Time is supplied by the caller as plain tick
//! parameters, so every run is deterministic and replayable.

pub mod civilization;
pub mod config;
pub mod error;
pub mod events;
pub mod growth;
pub mod listing;
pub mod market;
pub mod policy;
pub mod registry;
pub mod response;

// Re-export primary types at crate root.
pub use civilization::CivilizationContract;
pub use config::{CivilizationConfig, ConfigError, ContractsConfig, MarketConfig, RegistryConfig};
pub use error::{ContractError, ContractResult};
pub use events::EventTokenContract;
pub use market::MarketplaceContract;
pub use registry::DataRegistryContract;
pub use response::ContractResponse;

/// One engine instance: all four contract facades with their own counters
/// and stores.
///
/// A suite is constructed fresh per session (or per test) from a
/// [`ContractsConfig`] -- there is no ambient global state anywhere in the
/// workspace, so two suites never observe each other.
#[derive(Debug, Clone)]
pub struct ContractSuite {
    /// The civilization-growth contract.
    pub civilizations: CivilizationContract,
    /// The cosmic event token contract.
    pub events: EventTokenContract,
    /// The astronomical data registry contract.
    pub registry: DataRegistryContract,
    /// The marketplace contract.
    pub market: MarketplaceContract,
}

impl ContractSuite {
    /// Create a fresh suite from configuration.
    pub fn new(config: ContractsConfig) -> Self {
        let ContractsConfig {
            civilization,
            registry,
            market,
        } = config;
        Self {
            civilizations: CivilizationContract::new(civilization),
            events: EventTokenContract::new(),
            registry: DataRegistryContract::new(registry),
            market: MarketplaceContract::new(market),
        }
    }
}

impl Default for ContractSuite {
    fn default() -> Self {
        Self::new(ContractsConfig::default())
    }
}
