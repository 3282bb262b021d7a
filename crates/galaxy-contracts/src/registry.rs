//! Data registry contract facade.
//!
//! Two write-once record kinds behind one administrator gate: astronomical
//! observations and physics models. Only the configured registry owner may
//! add records; reads are open. No update or delete operation exists --
//! registry history is append-only.
//!
//! The registration timestamp is the current tick, supplied by the caller's
//! environment (the engine holds no clock of its own).

use rust_decimal::Decimal;

use galaxy_types::{AstronomicalDatum, DatumId, ModelId, PhysicsModel, Principal, RecordKind};

use galaxy_state::Namespace;

use crate::config::RegistryConfig;
use crate::error::{ContractError, ContractResult};
use crate::policy;

/// Public operations for the data registry record kinds.
#[derive(Debug, Clone)]
pub struct DataRegistryContract {
    data: Namespace<DatumId, AstronomicalDatum>,
    models: Namespace<ModelId, PhysicsModel>,
    config: RegistryConfig,
}

impl DataRegistryContract {
    /// Create an empty facade gated by the given registry configuration.
    pub const fn new(config: RegistryConfig) -> Self {
        Self {
            data: Namespace::new(RecordKind::AstronomicalDatum),
            models: Namespace::new(RecordKind::PhysicsModel),
            config,
        }
    }

    /// Add an astronomical datum, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Forbidden`] if `caller` is not the
    /// configured registry owner; the datum counter is left untouched.
    pub fn add_astronomical_datum(
        &mut self,
        caller: &Principal,
        data_type: impl Into<String>,
        value: Decimal,
        current_tick: u64,
    ) -> ContractResult<DatumId> {
        if !policy::is_registry_owner(&self.config, caller) {
            return Err(ContractError::Forbidden);
        }
        let datum = AstronomicalDatum {
            data_type: data_type.into(),
            value,
            timestamp: current_tick,
        };
        let id = self.data.issue(datum)?;
        tracing::debug!(%id, "registered astronomical datum");
        Ok(id)
    }

    /// Add a physics model, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Forbidden`] if `caller` is not the
    /// configured registry owner; the model counter is left untouched.
    pub fn add_physics_model(
        &mut self,
        caller: &Principal,
        model_name: impl Into<String>,
        parameters: Vec<Decimal>,
        current_tick: u64,
    ) -> ContractResult<ModelId> {
        if !policy::is_registry_owner(&self.config, caller) {
            return Err(ContractError::Forbidden);
        }
        let model = PhysicsModel {
            model_name: model_name.into(),
            parameters,
            timestamp: current_tick,
        };
        let id = self.models.issue(model)?;
        tracing::debug!(%id, "registered physics model");
        Ok(id)
    }

    /// Read the astronomical datum under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no datum.
    pub fn datum(&self, id: DatumId) -> ContractResult<&AstronomicalDatum> {
        Ok(self.data.get(id)?)
    }

    /// Read the physics model under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no model.
    pub fn model(&self, id: ModelId) -> ContractResult<&PhysicsModel> {
        Ok(self.models.get(id)?)
    }

    /// Return the number of registered astronomical data points.
    pub fn datum_count(&self) -> usize {
        self.data.len()
    }

    /// Return the number of registered physics models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
