use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Open to any caller once the sale has ended.
    #[handle_result]
    pub fn reveal_item(&mut self, item_id: u32) -> Result<(), BlindBoxError> {
        let actor_id = env::predecessor_account_id();
        self.reveal_one(&actor_id, item_id)
    }

    /// Operator sweep over issued items in issue order. Returns how many were newly revealed.
    #[payable]
    #[handle_result]
    pub fn reveal_all(
        &mut self,
        from_index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<u32, BlindBoxError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.reveal_batch(&actor_id, from_index.unwrap_or(0), limit)
    }
}

impl Contract {
    pub(crate) fn reveal_one(
        &mut self,
        actor_id: &AccountId,
        item_id: u32,
    ) -> Result<(), BlindBoxError> {
        self.check_phase(Phase::Revealed)?;
        if !self.tokens.exists(item_id) {
            return Err(BlindBoxError::item_not_found(item_id));
        }
        if self.revealed.contains(&item_id) {
            return Err(BlindBoxError::AlreadyRevealed(format!(
                "Item {} is already revealed",
                item_id
            )));
        }

        self.revealed.insert(item_id);
        events::emit_item_revealed(actor_id, item_id);
        Ok(())
    }

    pub(crate) fn reveal_batch(
        &mut self,
        actor_id: &AccountId,
        from_index: u32,
        limit: Option<u32>,
    ) -> Result<u32, BlindBoxError> {
        self.check_operator(actor_id)?;
        self.check_phase(Phase::Revealed)?;
        let limit = limit.unwrap_or(MAX_REVEAL_BATCH);
        if limit == 0 || limit > MAX_REVEAL_BATCH {
            return Err(BlindBoxError::InvalidInput(format!(
                "Limit must be 1-{}",
                MAX_REVEAL_BATCH
            )));
        }

        let page = self.tokens.issued_page(from_index, limit);
        let mut revealed = 0;
        for &item_id in &page {
            // Already-revealed items are skipped, never re-flagged.
            if self.revealed.insert(item_id) {
                events::emit_item_revealed(actor_id, item_id);
                revealed += 1;
            }
        }

        events::emit_bulk_reveal(actor_id, from_index, page.len() as u32, revealed);
        Ok(revealed)
    }
}
