mod transfer;
mod views;

use near_sdk::store::{IterableSet, LookupMap, Vector};
use near_sdk::{AccountId, near};

use crate::BlindBoxError;
use crate::StorageKey;
use crate::guards::hash_account_id;

/// Ownership ledger for issued items: who owns what, and in which order items
/// were issued.
#[near(serializers = [borsh])]
pub struct TokenLedger {
    owner_by_id: LookupMap<u32, AccountId>,
    tokens_per_owner: LookupMap<AccountId, IterableSet<u32>>,
    // Issue order; drives enumeration and bulk reveal.
    issued: Vector<u32>,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self {
            owner_by_id: LookupMap::new(StorageKey::OwnerById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            issued: Vector::new(StorageKey::IssuedItems),
        }
    }

    pub fn create(&mut self, item_id: u32, owner_id: &AccountId) -> Result<(), BlindBoxError> {
        if self.owner_by_id.contains_key(&item_id) {
            return Err(BlindBoxError::Internal(format!(
                "Item {} was already issued",
                item_id
            )));
        }
        self.owner_by_id.insert(item_id, owner_id.clone());
        self.add_to_owner(owner_id, item_id);
        self.issued.push(item_id);
        Ok(())
    }

    pub fn owner_of(&self, item_id: u32) -> Option<&AccountId> {
        self.owner_by_id.get(&item_id)
    }

    pub fn exists(&self, item_id: u32) -> bool {
        self.owner_by_id.contains_key(&item_id)
    }

    pub fn balance_of(&self, owner_id: &AccountId) -> u32 {
        self.tokens_per_owner
            .get(owner_id)
            .map(|items| items.len())
            .unwrap_or(0)
    }

    pub fn total_supply(&self) -> u32 {
        self.issued.len()
    }

    #[cfg(test)]
    pub(crate) fn issued_at(&self, index: u32) -> Option<u32> {
        self.issued.get(index).copied()
    }

    pub(crate) fn issued_page(&self, from_index: u32, limit: u32) -> Vec<u32> {
        self.issued
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .copied()
            .collect()
    }

    pub(crate) fn owner_page(&self, owner_id: &AccountId, from_index: u32, limit: u32) -> Vec<u32> {
        let Some(items) = self.tokens_per_owner.get(owner_id) else {
            return vec![];
        };
        items
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .copied()
            .collect()
    }

    pub fn transfer(
        &mut self,
        from_id: &AccountId,
        to_id: &AccountId,
        item_id: u32,
    ) -> Result<(), BlindBoxError> {
        match self.owner_by_id.get(&item_id) {
            None => return Err(BlindBoxError::item_not_found(item_id)),
            Some(owner) if owner != from_id => {
                return Err(BlindBoxError::Unauthorized(
                    "Sender does not own this item".into(),
                ));
            }
            Some(_) => {}
        }
        if from_id == to_id {
            return Err(BlindBoxError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }
        self.remove_from_owner(from_id, item_id);
        self.add_to_owner(to_id, item_id);
        self.owner_by_id.insert(item_id, to_id.clone());
        Ok(())
    }

    fn add_to_owner(&mut self, owner_id: &AccountId, item_id: u32) {
        if let Some(items) = self.tokens_per_owner.get_mut(owner_id) {
            items.insert(item_id);
            return;
        }
        let mut items = IterableSet::new(StorageKey::TokensPerOwnerInner {
            account_id_hash: hash_account_id(owner_id),
        });
        items.insert(item_id);
        self.tokens_per_owner.insert(owner_id.clone(), items);
    }

    fn remove_from_owner(&mut self, owner_id: &AccountId, item_id: u32) {
        let emptied = match self.tokens_per_owner.get_mut(owner_id) {
            Some(items) => {
                items.remove(&item_id);
                items.is_empty()
            }
            None => false,
        };
        if emptied {
            self.tokens_per_owner.remove(owner_id);
        }
    }
}
