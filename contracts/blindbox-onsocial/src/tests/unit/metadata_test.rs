use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

/// Every id in 0..10 issued, sale ended with base `ipfs://x/`.
fn sold_out_and_ended() -> Contract {
    let mut contract = new_contract_with(test_config(10, 10, 100));
    activate(&mut contract);
    buy(&mut contract, buyer(), 10, 1_000).unwrap();
    end_sale(&mut contract, "ipfs://x/");
    contract
}

#[test]
fn unrevealed_items_share_placeholder() {
    let mut contract = new_contract();
    activate(&mut contract);
    let ids = buy(&mut contract, buyer(), 3, 300).unwrap();

    for id in ids {
        assert_eq!(contract.token_uri(id).unwrap(), UNREVEALED_URI);
    }
}

#[test]
fn revealed_item_uses_base_plus_id() {
    let mut contract = sold_out_and_ended();

    testing_env!(context(buyer()).build());
    contract.reveal_item(7).unwrap();

    assert_eq!(contract.token_uri(7).unwrap(), "ipfs://x/7");
    assert_eq!(contract.token_uri(3).unwrap(), UNREVEALED_URI);
}

#[test]
fn ended_but_unrevealed_item_keeps_placeholder() {
    let contract = sold_out_and_ended();
    assert_eq!(contract.token_uri(0).unwrap(), UNREVEALED_URI);
}

#[test]
fn flagged_item_without_base_keeps_placeholder() {
    let mut contract = new_contract();
    activate(&mut contract);
    let ids = buy(&mut contract, buyer(), 1, 100).unwrap();

    // Flag set while no revealed base exists yet.
    assert!(contract.revealed.insert(ids[0]));
    assert!(contract.is_item_revealed(ids[0]));
    assert_eq!(contract.token_uri(ids[0]).unwrap(), UNREVEALED_URI);
}

#[test]
fn unissued_item_uri_fails() {
    let mut contract = new_contract();
    activate(&mut contract);
    let ids = buy(&mut contract, buyer(), 1, 100).unwrap();
    let unissued = (0..10).find(|id| !ids.contains(id)).unwrap();

    let err = contract.token_uri(unissued).unwrap_err();
    assert!(matches!(err, BlindBoxError::NotFound(_)));
    let err = contract.token_uri(10).unwrap_err();
    assert!(matches!(err, BlindBoxError::NotFound(_)));
}

#[test]
fn nft_token_carries_uri_as_reference() {
    let mut contract = sold_out_and_ended();
    testing_env!(context(buyer()).build());
    contract.reveal_item(7).unwrap();

    let token = contract.nft_token("7".to_string()).unwrap();
    assert_eq!(token.token_id, "7");
    assert_eq!(token.owner_id, buyer());
    let metadata = token.metadata.unwrap();
    assert_eq!(metadata.reference.as_deref(), Some("ipfs://x/7"));
}

#[test]
fn nft_token_unknown_or_malformed_is_none() {
    let contract = new_contract();
    assert!(contract.nft_token("0".to_string()).is_none());
    assert!(contract.nft_token("abc".to_string()).is_none());
}

#[test]
fn contract_metadata_view() {
    let contract = new_contract();
    let view = contract.nft_metadata();
    assert_eq!(view.spec, NFT_METADATA_SPEC);
    assert_eq!(view.name, "Mystery Crates");
    assert_eq!(view.symbol, "CRATE");
    assert!(view.base_uri.is_none());
}
