//! Cosmic event token contract facade.
//!
//! A transferable token kind: minting is open (no access restriction),
//! transfer is owner-gated, and the URI and event type are fixed at mint.
//! Tokens persist indefinitely -- there is no burn operation.

use galaxy_types::{EventToken, EventTokenId, Principal, RecordKind};

use galaxy_state::Namespace;

use crate::error::{ContractError, ContractResult};
use crate::policy;

/// Public operations for the event token record kind.
#[derive(Debug, Clone)]
pub struct EventTokenContract {
    namespace: Namespace<EventTokenId, EventToken>,
}

impl Default for EventTokenContract {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTokenContract {
    /// Create an empty facade.
    pub const fn new() -> Self {
        Self {
            namespace: Namespace::new(RecordKind::EventToken),
        }
    }

    /// Mint a new token to `recipient`, returning its ID.
    ///
    /// Minting is open: any caller may mint to any recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Internal`] only on ID-space exhaustion.
    pub fn mint(
        &mut self,
        recipient: Principal,
        uri: impl Into<String>,
        event_type: impl Into<String>,
    ) -> ContractResult<EventTokenId> {
        let token = EventToken {
            owner: recipient,
            uri: uri.into(),
            event_type: event_type.into(),
        };
        let id = self.namespace.issue(token)?;
        tracing::debug!(%id, "minted event token");
        Ok(id)
    }

    /// Transfer the token under `id` from `sender` to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no token,
    /// or [`ContractError::Forbidden`] if `sender` is not the current
    /// owner. On error the owner is unchanged.
    pub fn transfer(
        &mut self,
        id: EventTokenId,
        sender: &Principal,
        recipient: Principal,
    ) -> ContractResult<()> {
        let current = self.namespace.get(id)?;
        if !policy::is_owner(&current.owner, sender) {
            return Err(ContractError::Forbidden);
        }
        let next = EventToken {
            owner: recipient,
            uri: current.uri.clone(),
            event_type: current.event_type.clone(),
        };
        self.namespace.put(id, next);
        tracing::debug!(%id, "transferred event token");
        Ok(())
    }

    /// Read the current owner of the token under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no token.
    pub fn owner(&self, id: EventTokenId) -> ContractResult<&Principal> {
        Ok(&self.namespace.get(id)?.owner)
    }

    /// Read the metadata URI of the token under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no token.
    pub fn uri(&self, id: EventTokenId) -> ContractResult<&str> {
        Ok(&self.namespace.get(id)?.uri)
    }

    /// Read the event type of the token under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no token.
    pub fn event_type(&self, id: EventTokenId) -> ContractResult<&str> {
        Ok(&self.namespace.get(id)?.event_type)
    }

    /// Return the number of tokens ever minted.
    ///
    /// Tokens are never burned, so this equals the mint count.
    pub fn len(&self) -> usize {
        self.namespace.len()
    }

    /// Return whether no token has been minted yet.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPERNOVA_URI: &str = "https://example.com/event/1";

    fn minted() -> (EventTokenContract, Option<EventTokenId>) {
        let mut contract = EventTokenContract::new();
        let id = contract
            .mint(Principal::from("alice"), SUPERNOVA_URI, "Supernova")
            .ok();
        (contract, id)
    }

    #[test]
    fn mint_is_open_and_sequential() {
        let mut contract = EventTokenContract::new();
        let first = contract
            .mint(Principal::from("alice"), SUPERNOVA_URI, "Supernova")
            .ok();
        let second = contract
            .mint(Principal::from("bob"), "https://example.com/event/2", "Pulsar")
            .ok();
        assert_eq!(first, Some(EventTokenId::FIRST));
        assert_eq!(second, Some(EventTokenId::from(2)));
        assert_eq!(contract.len(), 2);
    }

    #[test]
    fn minted_token_carries_supplied_fields() {
        let (contract, id) = minted();
        if let Some(id) = id {
            assert_eq!(contract.owner(id).ok(), Some(&Principal::from("alice")));
            assert_eq!(contract.uri(id).ok(), Some(SUPERNOVA_URI));
            assert_eq!(contract.event_type(id).ok(), Some("Supernova"));
        }
    }

    #[test]
    fn transfer_reassigns_owner() {
        let (mut contract, id) = minted();
        if let Some(id) = id {
            let result = contract.transfer(id, &Principal::from("alice"), Principal::from("bob"));
            assert!(result.is_ok());
            assert_eq!(contract.owner(id).ok(), Some(&Principal::from("bob")));
        }
    }

    #[test]
    fn transfer_by_non_owner_is_forbidden_and_leaves_owner_unchanged() {
        let (mut contract, id) = minted();
        if let Some(id) = id {
            let result =
                contract.transfer(id, &Principal::from("mallory"), Principal::from("bob"));
            assert_eq!(result, Err(ContractError::Forbidden));
            assert_eq!(contract.owner(id).ok(), Some(&Principal::from("alice")));
        }
    }

    #[test]
    fn transfer_of_unknown_token_is_not_found() {
        let mut contract = EventTokenContract::new();
        let result = contract.transfer(
            EventTokenId::from(999),
            &Principal::from("alice"),
            Principal::from("bob"),
        );
        assert!(matches!(result, Err(ContractError::NotFound { .. })));
    }

    #[test]
    fn reads_of_unknown_token_are_not_found() {
        let contract = EventTokenContract::new();
        assert!(contract.owner(EventTokenId::from(999)).is_err());
        assert!(contract.uri(EventTokenId::from(999)).is_err());
        assert!(contract.event_type(EventTokenId::from(999)).is_err());
    }
}
