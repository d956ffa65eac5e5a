use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    PermutationLinks,
    RevealedItems,
    OwnerById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
    IssuedItems,
}
