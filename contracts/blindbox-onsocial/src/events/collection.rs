use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::COLLECTION;
use super::builder::EventBuilder;
use super::nep171;

pub fn emit_collection_created(
    owner_id: &AccountId,
    name: &str,
    icon: Option<&str>,
    supply_cap: u32,
    per_buyer_cap: u32,
    unit_price: U128,
) {
    EventBuilder::new(COLLECTION, "create", owner_id)
        .field("name", name)
        .field_opt("icon", icon)
        .field("supply_cap", supply_cap)
        .field("per_buyer_cap", per_buyer_cap)
        .field("unit_price", unit_price)
        .emit();
}

pub fn emit_sale_activated(operator_id: &AccountId) {
    EventBuilder::new(COLLECTION, "sale_activated", operator_id).emit();
}

pub fn emit_sale_ended(operator_id: &AccountId, revealed_base_uri: &str, issued_count: u32) {
    EventBuilder::new(COLLECTION, "sale_ended", operator_id)
        .field("revealed_base_uri", revealed_base_uri)
        .field("issued_count", issued_count)
        .emit();
}

pub struct Purchase<'a> {
    pub buyer_id: &'a AccountId,
    pub quantity: u32,
    pub total_price: U128,
    pub paid: U128,
    pub item_ids: &'a [u32],
}

pub fn emit_purchase(e: &Purchase) {
    EventBuilder::new(COLLECTION, "purchase", e.buyer_id)
        .field("buyer_id", e.buyer_id)
        .field("quantity", e.quantity)
        .field("total_price", e.total_price)
        .field("paid", e.paid)
        .field("item_ids", e.item_ids)
        .emit();
    let token_ids: Vec<String> = e.item_ids.iter().map(|id| id.to_string()).collect();
    nep171::emit_mint(e.buyer_id.as_str(), &token_ids, None);
}

pub fn emit_items_minted(buyer_id: &AccountId, old_count: u32, new_count: u32) {
    EventBuilder::new(COLLECTION, "items_minted", buyer_id)
        .field("old_count", old_count)
        .field("new_count", new_count)
        .emit();
}

pub fn emit_item_revealed(actor_id: &AccountId, item_id: u32) {
    EventBuilder::new(COLLECTION, "item_revealed", actor_id)
        .field("item_id", item_id)
        .emit();
    nep171::emit_metadata_update(&[item_id.to_string()]);
}

pub fn emit_bulk_reveal(operator_id: &AccountId, from_index: u32, scanned: u32, revealed: u32) {
    EventBuilder::new(COLLECTION, "bulk_reveal", operator_id)
        .field("from_index", from_index)
        .field("scanned", scanned)
        .field("revealed", revealed)
        .emit();
}

pub fn emit_withdraw(operator_id: &AccountId, receiver_id: &AccountId, amount: u128) {
    EventBuilder::new(COLLECTION, "withdraw", operator_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdraw_failed(receiver_id: &AccountId, amount: u128) {
    EventBuilder::new(COLLECTION, "withdraw_failed", receiver_id)
        .field("receiver_id", receiver_id)
        .field("amount", amount)
        .emit();
}
