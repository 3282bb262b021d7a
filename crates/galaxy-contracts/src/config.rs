//! Configuration loading and typed config structures for the contract suite.
//!
//! Configuration covers the fixed values the contracts are parameterized
//! by: the registry administrator principal, the marketplace listing
//! expiration horizon, and the civilization genesis values. All sections
//! and fields have defaults matching the reference deployment, so an empty
//! document yields a fully working configuration.

use std::path::Path;

use serde::Deserialize;

use galaxy_types::Principal;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Principal string used by the reference deployment for both the registry
/// administrator and the civilization genesis owner.
const REFERENCE_DEPLOYER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Top-level configuration for the contract suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContractsConfig {
    /// Civilization genesis values.
    #[serde(default)]
    pub civilization: CivilizationConfig,

    /// Data registry access configuration.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Marketplace parameters.
    #[serde(default)]
    pub market: MarketConfig,
}

impl ContractsConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Genesis values for newly created civilizations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CivilizationConfig {
    /// Principal recorded as the owner of every created civilization.
    #[serde(default = "default_owner")]
    pub default_owner: Principal,

    /// Technology level at creation.
    #[serde(default = "default_technology")]
    pub starting_technology: u64,

    /// Population at creation.
    #[serde(default = "default_population")]
    pub starting_population: u64,

    /// Resource stockpile at creation.
    #[serde(default = "default_resources")]
    pub starting_resources: u64,
}

impl Default for CivilizationConfig {
    fn default() -> Self {
        Self {
            default_owner: default_owner(),
            starting_technology: default_technology(),
            starting_population: default_population(),
            starting_resources: default_resources(),
        }
    }
}

/// Access configuration for the data registry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryConfig {
    /// The administrator principal allowed to add registry records.
    ///
    /// This is fixed configuration, not mutable state: there is no
    /// operation that reassigns the registry owner.
    #[serde(default = "default_owner")]
    pub owner: Principal,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
        }
    }
}

/// Marketplace parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MarketConfig {
    /// Validity horizon (in ticks) stamped onto every new listing.
    ///
    /// A horizon of 0 produces listings that are expired from birth, which
    /// is how the lazy-expiry path is exercised deterministically.
    #[serde(default = "default_listing_expiration")]
    pub listing_expiration: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            listing_expiration: default_listing_expiration(),
        }
    }
}

fn default_owner() -> Principal {
    Principal::from(REFERENCE_DEPLOYER)
}

const fn default_technology() -> u64 {
    1
}

const fn default_population() -> u64 {
    1_000_000
}

const fn default_resources() -> u64 {
    1000
}

const fn default_listing_expiration() -> u64 {
    10_000
}
