//! Listing validity rule.
//!
//! Expiration is compared, never scheduled: there is no background sweep,
//! and the engine itself never decrements a listing's horizon. Expiry is
//! evaluated lazily at the moment of purchase.

use galaxy_types::Listing;

/// A listing is purchasable iff its validity horizon has not reached zero.
pub const fn is_purchasable(listing: &Listing) -> bool {
    listing.expiration > 0
}
