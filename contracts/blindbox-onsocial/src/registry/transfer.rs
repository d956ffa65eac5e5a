use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        memo: Option<String>,
    ) -> Result<(), BlindBoxError> {
        check_one_yocto()?;
        let sender_id = env::predecessor_account_id();
        self.transfer_item(&sender_id, &receiver_id, &token_id, memo.as_deref())
    }
}

impl Contract {
    pub(crate) fn transfer_item(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: &str,
        memo: Option<&str>,
    ) -> Result<(), BlindBoxError> {
        let item_id = token_id
            .parse::<u32>()
            .map_err(|_| BlindBoxError::InvalidInput("Token ID must be a decimal item id".into()))?;
        self.tokens.transfer(sender_id, receiver_id, item_id)?;
        let canonical_id = item_id.to_string();
        events::nep171::emit_transfer(
            sender_id.as_str(),
            receiver_id.as_str(),
            &[canonical_id.as_str()],
            None,
            memo,
        );
        Ok(())
    }
}
