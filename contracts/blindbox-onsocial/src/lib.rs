use near_sdk::json_types::U128;
use near_sdk::store::LookupSet;
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;
mod storage;

mod allocation;
mod collection;
mod lifecycle;
mod metadata;
mod registry;

mod admin;

#[cfg(test)]
mod tests;

pub use allocation::AllocationEngine;
pub use collection::{CollectionConfig, CollectionMetadata, CollectionStats, PurchaseWindow};
pub use constants::*;
pub use errors::BlindBoxError;
pub use lifecycle::Phase;
pub use metadata::{ContractMetadataView, Token, TokenMetadata};
pub use registry::TokenLedger;
pub use storage::StorageKey;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub config: CollectionConfig,
    pub metadata: CollectionMetadata,

    pub phase: Phase,
    // Empty until the sale ends; immutable afterwards.
    pub revealed_base_uri: String,
    pub(crate) revealed: LookupSet<u32>,

    pub(crate) allocation: AllocationEngine,
    pub(crate) tokens: TokenLedger,

    // Token accounting guarantee: sum of purchase deposits not yet swept by `withdraw`.
    pub proceeds: u128,
    // Reentrancy guard: set while a withdrawal transfer awaits its callback.
    pub(crate) withdrawal_in_flight: bool,
}
