//! End-to-end scenarios for the four contract facades.
//!
//! Each scenario builds a fresh [`ContractSuite`] -- the engine owns its
//! own counters and stores, so tests never share state.

use rust_decimal::Decimal;

use galaxy_contracts::{
    ContractError, ContractResponse, ContractSuite, ContractsConfig, MarketConfig,
};
use galaxy_types::{CivilizationId, EventTokenId, ListingId, Principal};

fn deployer() -> Principal {
    Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
}

fn outsider() -> Principal {
    Principal::from("ST2PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
}

// ---------------------------------------------------------------------------
// Civilization manager
// ---------------------------------------------------------------------------

#[test]
fn creates_a_new_civilization() {
    let mut suite = ContractSuite::default();
    let id = suite.civilizations.create("Test Civilization");
    assert_eq!(id.ok(), Some(CivilizationId::FIRST));
    assert_eq!(suite.civilizations.len(), 1);
}

#[test]
fn update_of_nonexistent_civilization_fails() {
    let mut suite = ContractSuite::default();
    let result = suite.civilizations.update(CivilizationId::from(999), 100);
    let response = ContractResponse::from(result);
    assert_eq!(response.err_code(), Some(404));
}

#[test]
fn growth_over_100_ticks_matches_the_reference_values() {
    let mut suite = ContractSuite::default();
    let id = suite.civilizations.create("Test Civilization").ok();
    if let Some(id) = id {
        assert!(suite.civilizations.update(id, 100).is_ok());
        let civ = suite.civilizations.get(id).ok();
        assert_eq!(civ.map(|c| c.technology_level), Some(2));
        assert_eq!(civ.map(|c| c.population), Some(1_100_000));
        assert_eq!(civ.map(|c| c.resources), Some(1010));
        assert_eq!(civ.map(|c| c.last_update), Some(100));
    }
}

#[test]
fn two_updates_with_the_same_elapsed_apply_growth_twice() {
    let mut suite = ContractSuite::default();
    let id = suite.civilizations.create("Test Civilization").ok();
    if let Some(id) = id {
        assert!(suite.civilizations.update(id, 100).is_ok());
        let first = suite.civilizations.get(id).ok().cloned();
        assert!(suite.civilizations.update(id, 100).is_ok());
        let second = suite.civilizations.get(id).ok().cloned();
        assert_ne!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Cosmic event token
// ---------------------------------------------------------------------------

#[test]
fn mints_a_new_cosmic_event_token() {
    let mut suite = ContractSuite::default();
    let id = suite
        .events
        .mint(deployer(), "https://example.com/event/1", "Supernova");
    assert_eq!(id.ok(), Some(EventTokenId::FIRST));
    assert_eq!(suite.events.len(), 1);
}

#[test]
fn transfers_an_event_token() {
    let mut suite = ContractSuite::default();
    let id = suite
        .events
        .mint(deployer(), "https://example.com/event/1", "Supernova")
        .ok();
    if let Some(id) = id {
        assert!(suite.events.transfer(id, &deployer(), outsider()).is_ok());
        assert_eq!(suite.events.owner(id).ok(), Some(&outsider()));
    }
}

#[test]
fn reads_back_the_event_uri_and_type() {
    let mut suite = ContractSuite::default();
    let id = suite
        .events
        .mint(deployer(), "https://example.com/event/1", "Supernova")
        .ok();
    if let Some(id) = id {
        assert_eq!(suite.events.uri(id).ok(), Some("https://example.com/event/1"));
        assert_eq!(suite.events.event_type(id).ok(), Some("Supernova"));
    }
}

#[test]
fn transfer_of_a_nonexistent_token_fails() {
    let mut suite = ContractSuite::default();
    let result = suite
        .events
        .transfer(EventTokenId::from(999), &deployer(), outsider());
    let response = ContractResponse::from(result);
    assert_eq!(response.err_code(), Some(404));
}

#[test]
fn transfer_by_a_non_owner_fails_and_owner_is_unchanged() {
    let mut suite = ContractSuite::default();
    let id = suite
        .events
        .mint(deployer(), "https://example.com/event/1", "Supernova")
        .ok();
    if let Some(id) = id {
        let result = suite.events.transfer(id, &outsider(), outsider());
        assert_eq!(ContractResponse::from(result).err_code(), Some(403));
        assert_eq!(suite.events.owner(id).ok(), Some(&deployer()));
    }
}

// ---------------------------------------------------------------------------
// Data registry
// ---------------------------------------------------------------------------

#[test]
fn registry_owner_adds_data_and_models() {
    let mut suite = ContractSuite::default();
    let datum = suite
        .registry
        .add_astronomical_datum(&deployer(), "Star Luminosity", Decimal::new(1000, 0), 0);
    assert!(datum.is_ok());
    assert_eq!(suite.registry.datum_count(), 1);

    let parameters: Vec<Decimal> = (1..=5).map(|n| Decimal::new(n, 0)).collect();
    let model = suite
        .registry
        .add_physics_model(&deployer(), "Dark Matter Distribution", parameters, 0);
    assert!(model.is_ok());
    assert_eq!(suite.registry.model_count(), 1);
}

#[test]
fn registry_records_are_retrievable_exactly_as_supplied() {
    let mut suite = ContractSuite::default();
    let datum_id = suite
        .registry
        .add_astronomical_datum(&deployer(), "Star Luminosity", Decimal::new(1000, 0), 0)
        .ok();
    let datum = datum_id.and_then(|id| suite.registry.datum(id).ok());
    assert_eq!(datum.map(|d| d.data_type.as_str()), Some("Star Luminosity"));
    assert_eq!(datum.map(|d| d.value), Some(Decimal::new(1000, 0)));
    assert_eq!(datum.map(|d| d.timestamp), Some(0));
}

#[test]
fn non_owner_registry_writes_fail_without_consuming_ids() {
    let mut suite = ContractSuite::default();
    let datum = suite
        .registry
        .add_astronomical_datum(&outsider(), "Star Luminosity", Decimal::new(1000, 0), 0);
    assert_eq!(ContractResponse::from(datum).err_code(), Some(403));

    let parameters: Vec<Decimal> = (1..=5).map(|n| Decimal::new(n, 0)).collect();
    let model = suite
        .registry
        .add_physics_model(&outsider(), "Dark Matter Distribution", parameters, 0);
    assert_eq!(ContractResponse::from(model).err_code(), Some(403));

    assert_eq!(suite.registry.datum_count(), 0);
    assert_eq!(suite.registry.model_count(), 0);
}

#[test]
fn reads_of_nonexistent_registry_records_fail() {
    let suite = ContractSuite::default();
    let datum = suite.registry.datum(galaxy_types::DatumId::from(999));
    let model = suite.registry.model(galaxy_types::ModelId::from(999));
    assert_eq!(ContractResponse::from(datum.cloned()).err_code(), Some(404));
    assert_eq!(ContractResponse::from(model.cloned()).err_code(), Some(404));
}

// ---------------------------------------------------------------------------
// Galactic marketplace
// ---------------------------------------------------------------------------

#[test]
fn creates_a_new_listing() {
    let mut suite = ContractSuite::default();
    let id = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0));
    assert_eq!(id.ok(), Some(ListingId::FIRST));
    assert_eq!(suite.market.len(), 1);
}

#[test]
fn purchases_an_existing_listing() {
    let mut suite = ContractSuite::default();
    let id = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0))
        .ok();
    if let Some(id) = id {
        let resolved = suite.market.purchase(id, &outsider());
        assert!(resolved.is_ok());
        assert_eq!(suite.market.len(), 0);
    }
}

#[test]
fn cancels_a_listing() {
    let mut suite = ContractSuite::default();
    let id = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0))
        .ok();
    if let Some(id) = id {
        assert!(suite.market.cancel(id, &deployer()).is_ok());
        assert_eq!(suite.market.len(), 0);
    }
}

#[test]
fn purchase_of_a_nonexistent_listing_fails() {
    let mut suite = ContractSuite::default();
    let result = suite.market.purchase(ListingId::from(999), &outsider());
    assert_eq!(ContractResponse::from(result).err_code(), Some(404));
}

#[test]
fn cancel_by_a_non_seller_fails() {
    let mut suite = ContractSuite::default();
    let id = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0))
        .ok();
    if let Some(id) = id {
        let result = suite.market.cancel(id, &outsider());
        assert_eq!(ContractResponse::from(result).err_code(), Some(403));
        assert_eq!(suite.market.len(), 1);
    }
}

#[test]
fn expired_listing_rejects_purchase_with_invalid_state() {
    let config = ContractsConfig {
        market: MarketConfig {
            listing_expiration: 0,
        },
        ..ContractsConfig::default()
    };
    let mut suite = ContractSuite::new(config);
    let id = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0))
        .ok();
    if let Some(id) = id {
        let result = suite.market.purchase(id, &outsider());
        assert_eq!(ContractResponse::from(result).err_code(), Some(400));
        // The expired listing was not deleted.
        assert_eq!(suite.market.len(), 1);
        // A later cancel by the seller still resolves it.
        assert!(suite.market.cancel(id, &deployer()).is_ok());
        assert_eq!(suite.market.len(), 0);
    }
}

// ---------------------------------------------------------------------------
// Cross-cutting engine properties
// ---------------------------------------------------------------------------

#[test]
fn every_namespace_issues_from_one_independently() {
    let mut suite = ContractSuite::default();
    let civ = suite.civilizations.create("Alpha");
    let token = suite
        .events
        .mint(deployer(), "https://example.com/event/1", "Supernova");
    let datum = suite
        .registry
        .add_astronomical_datum(&deployer(), "Star Luminosity", Decimal::new(1000, 0), 0);
    let listing = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0));

    assert_eq!(civ.ok().map(CivilizationId::into_inner), Some(1));
    assert_eq!(token.ok().map(EventTokenId::into_inner), Some(1));
    assert_eq!(datum.ok().map(galaxy_types::DatumId::into_inner), Some(1));
    assert_eq!(listing.ok().map(ListingId::into_inner), Some(1));
}

#[test]
fn operations_on_never_issued_ids_fail_independent_of_other_state() {
    let mut suite = ContractSuite::default();
    // Populate some unrelated state first.
    let _ = suite.civilizations.create("Alpha");
    let _ = suite
        .market
        .create_listing(deployer(), "Starship", Decimal::new(1000, 0));

    assert_eq!(
        suite.civilizations.update(CivilizationId::from(42), 100),
        Err(ContractError::NotFound {
            kind: galaxy_types::RecordKind::Civilization,
            id: 42,
        })
    );
    assert!(suite
        .events
        .transfer(EventTokenId::from(42), &deployer(), outsider())
        .is_err());
    assert!(suite.market.purchase(ListingId::from(42), &outsider()).is_err());
}

#[test]
fn wire_responses_are_exactly_one_variant() {
    let mut suite = ContractSuite::default();
    let ok = ContractResponse::from(suite.civilizations.create("Alpha"));
    let json = serde_json::to_string(&ok).ok();
    assert_eq!(json.as_deref(), Some(r#"{"ok":1}"#));

    let err =
        ContractResponse::acknowledged(suite.civilizations.update(CivilizationId::from(999), 100));
    let json = serde_json::to_string(&err).ok();
    assert_eq!(json.as_deref(), Some(r#"{"err":404}"#));

    let id = suite.civilizations.create("Beta").ok();
    if let Some(id) = id {
        let ack = ContractResponse::acknowledged(suite.civilizations.update(id, 100));
        let json = serde_json::to_string(&ack).ok();
        assert_eq!(json.as_deref(), Some(r#"{"ok":true}"#));
    }
}
