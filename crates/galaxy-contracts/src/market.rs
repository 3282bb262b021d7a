//! Marketplace contract facade.
//!
//! Listings follow a strict lifecycle: created with the configured validity
//! horizon, then deleted by exactly one of purchase, cancel, or (lazily
//! detected) expiration. Deletion is terminal -- the ID is never reissued
//! and every later operation on it answers not-found.
//!
//! Payment settlement is delegated to the external value-transfer ledger:
//! `purchase` returns the resolved listing so the embedding system can
//! commit the transfer and the deletion atomically together.

use galaxy_types::{Listing, ListingId, Principal, RecordKind};

use galaxy_state::Namespace;

use crate::config::MarketConfig;
use crate::error::{ContractError, ContractResult};
use crate::listing;
use crate::policy;

/// Public operations for the marketplace record kind.
#[derive(Debug, Clone)]
pub struct MarketplaceContract {
    namespace: Namespace<ListingId, Listing>,
    config: MarketConfig,
}

impl MarketplaceContract {
    /// Create an empty facade with the given marketplace configuration.
    pub const fn new(config: MarketConfig) -> Self {
        Self {
            namespace: Namespace::new(RecordKind::Listing),
            config,
        }
    }

    /// Create a new listing, returning its ID.
    ///
    /// Creation is open and stamps the configured expiration horizon onto
    /// the listing.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Internal`] only on ID-space exhaustion.
    pub fn create_listing(
        &mut self,
        seller: Principal,
        item_type: impl Into<String>,
        price: rust_decimal::Decimal,
    ) -> ContractResult<ListingId> {
        let record = Listing {
            seller,
            item_type: item_type.into(),
            price,
            expiration: self.config.listing_expiration,
        };
        let id = self.namespace.issue(record)?;
        tracing::debug!(%id, "created listing");
        Ok(id)
    }

    /// Purchase the listing under `id`, deleting it.
    ///
    /// Returns the resolved listing so the embedding system can settle the
    /// payment (buyer to seller, at the listing price) atomically with this
    /// call. The buyer identity is accepted for symmetry with the wire
    /// protocol; purchasing is open, so it is not checked against anything.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no listing,
    /// or [`ContractError::Expired`] if the listing's horizon has reached
    /// zero. An expired listing is not deleted.
    pub fn purchase(&mut self, id: ListingId, buyer: &Principal) -> ContractResult<Listing> {
        let current = self.namespace.get(id)?;
        if !listing::is_purchasable(current) {
            return Err(ContractError::Expired {
                kind: RecordKind::Listing,
                id: id.into_inner(),
            });
        }
        let resolved = self
            .namespace
            .delete(id)
            .ok_or(ContractError::Internal("listing vanished during purchase"))?;
        tracing::debug!(%id, buyer = %buyer, "purchased listing");
        Ok(resolved)
    }

    /// Cancel the listing under `id`, deleting it.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no listing,
    /// or [`ContractError::Forbidden`] if `seller` is not the listing's
    /// seller. On error the listing is unchanged.
    pub fn cancel(&mut self, id: ListingId, seller: &Principal) -> ContractResult<()> {
        let current = self.namespace.get(id)?;
        if !policy::is_owner(&current.seller, seller) {
            return Err(ContractError::Forbidden);
        }
        let _ = self.namespace.delete(id);
        tracing::debug!(%id, "cancelled listing");
        Ok(())
    }

    /// Read the listing under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotFound`] if the ID refers to no listing.
    pub fn get(&self, id: ListingId) -> ContractResult<&Listing> {
        Ok(self.namespace.get(id)?)
    }

    /// Return the number of live (unresolved) listings.
    pub fn len(&self) -> usize {
        self.namespace.len()
    }

    /// Return whether no listing is currently live.
    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }
}
