use crate::*;
use near_sdk::json_types::U128;

fn page(from_index: Option<U128>, limit: Option<u64>) -> (u32, u32) {
    let start = from_index.map(|i| i.0.min(u32::MAX as u128) as u32).unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as u32;
    (start, limit)
}

#[near]
impl Contract {
    pub fn nft_token(&self, token_id: String) -> Option<Token> {
        let item_id = token_id.parse::<u32>().ok()?;
        self.token_view(item_id)
    }

    pub fn owner_of(&self, item_id: u32) -> Option<AccountId> {
        self.tokens.owner_of(item_id).cloned()
    }

    pub fn balance_of(&self, account_id: AccountId) -> u32 {
        self.tokens.balance_of(&account_id)
    }

    pub fn nft_total_supply(&self) -> U128 {
        U128(self.tokens.total_supply() as u128)
    }

    pub fn nft_supply_for_owner(&self, account_id: AccountId) -> U128 {
        U128(self.tokens.balance_of(&account_id) as u128)
    }

    pub fn nft_tokens(&self, from_index: Option<U128>, limit: Option<u64>) -> Vec<Token> {
        let (start, limit) = page(from_index, limit);
        self.tokens
            .issued_page(start, limit)
            .into_iter()
            .filter_map(|item_id| self.token_view(item_id))
            .collect()
    }

    pub fn nft_tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<U128>,
        limit: Option<u64>,
    ) -> Vec<Token> {
        let (start, limit) = page(from_index, limit);
        self.tokens
            .owner_page(&account_id, start, limit)
            .into_iter()
            .filter_map(|item_id| self.token_view(item_id))
            .collect()
    }
}
