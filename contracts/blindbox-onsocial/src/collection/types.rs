use near_sdk::json_types::U128;
use near_sdk::near;

use crate::Phase;

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PurchaseWindow {
    // Purchases accepted in PreSale and Sale; closed once revealed.
    #[default]
    UntilReveal,
    SaleOnly,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct CollectionConfig {
    pub unit_price: U128,
    pub supply_cap: u32,
    pub per_buyer_cap: u32,
    #[serde(default)]
    pub purchase_window: PurchaseWindow,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    /// Metadata URI served for every item until that item is revealed.
    pub unrevealed_uri: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[near(serializers = [json])]
pub struct CollectionStats {
    pub phase: Phase,
    pub supply_cap: u32,
    pub issued_count: u32,
    pub remaining: u32,
    pub unit_price: U128,
    pub per_buyer_cap: u32,
    pub purchase_window: PurchaseWindow,
    pub proceeds: U128,
    pub revealed_base_uri: Option<String>,
}
