//! Civilization contract facade.
//!
//! Composes the civilization namespace with the growth rule. Creation is
//! open and always succeeds; updates require the record to exist but carry
//! no ownership gate (the reference contract lets any caller advance a
//! civilization's clock).

use galaxy_types::{Civilization, CivilizationId, RecordKind};

use galaxy_state::Namespace;

use crate::config::CivilizationConfig;
use crate::error::ContractResult;
use crate::growth;

/// Public operations for the civilization record kind.
#[derive(Debug, Clone)]
pub struct CivilizationContract {
    namespace: Namespace<CivilizationId, Civilization>,
    config: CivilizationConfig,
}

impl CivilizationContract {
    /// Create an empty facade with the given genesis configuration.
    pub const fn new(config: CivilizationConfig) -> Self {
        Self {
            namespace: Namespace::new(RecordKind::Civilization),
            config,
        }
    }

    /// Create a new civilization, returning its ID.
    ///
    /// The record is owned by the configured default owner and starts from
    /// the configured genesis values with `last_update` 0.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Internal`] only on ID-space exhaustion.
    ///
    /// [`ContractError::Internal`]: crate::error::ContractError::Internal
    pub fn create(&mut self, name: impl Into<String>) -> ContractResult<CivilizationId> {
        let record = Civilization {
            owner: self.config.default_owner.clone(),
            name: name.into(),
            technology_level: self.config.starting_technology,
            population: self.config.starting_population,
            resources: self.config.starting_resources,
            last_update: 0,
        };
        let id = self.namespace.issue(record)?;
        tracing::debug!(%id, "created civilization");
        Ok(id)
    }

    /// Apply `elapsed` ticks of growth to the civilization under `id`.
    ///
    /// Loads the snapshot, applies the growth rule, and writes the new
    /// snapshot back wholesale. Re-applying the same `elapsed` compounds
    /// growth again -- replay semantics, not idempotence.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID was never issued or
    /// refers to no record.
    ///
    /// [`ContractError::NotFound`]: crate::error::ContractError::NotFound
    pub fn update(&mut self, id: CivilizationId, elapsed: u64) -> ContractResult<()> {
        let current = self.namespace.get(id)?;
        let next = growth::apply_growth(current, elapsed);
        self.namespace.put(id, next);
        tracing::debug!(%id, elapsed, "applied civilization growth");
        Ok(())
    }

    /// Read the civilization under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no record.
    ///
    /// [`ContractError::NotFound`]: crate::error::ContractError::NotFound
    pub fn get(&self, id: CivilizationId) -> ContractResult<&Civilization> {
        Ok(self.namespace.get(id)?)
    }

    /// Return the number of civilizations ever created and not deleted.
    ///
    /// Civilizations are never deleted, so this equals the count created.
    pub fn len(&self) -> usize {
        self.namespace.len()
    }

    /// Return whether no civilization has been created yet.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }
}
