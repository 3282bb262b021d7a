//! Access policy predicates.
//!
//! Pure allow/deny functions; the facades decide which error code a denial
//! translates into. Three policies cover every operation in the suite:
//! owner-only (record attribute must equal the caller), registry-owner-only
//! (caller must equal the configured administrator), and open (no check --
//! reads, minting, purchasing).

use galaxy_types::Principal;

use crate::config::RegistryConfig;

/// Allow iff the caller is the record's owning principal.
///
/// Ownership is a plain attribute comparison: the `owner` (or `seller`)
/// field must equal the authenticated caller.
pub fn is_owner(owner: &Principal, caller: &Principal) -> bool {
    owner == caller
}

/// Allow iff the caller is the configured registry administrator.
pub fn is_registry_owner(config: &RegistryConfig, caller: &Principal) -> bool {
    config.owner == *caller
}
