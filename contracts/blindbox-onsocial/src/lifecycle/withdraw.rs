use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Sweeps all held proceeds to the operator. Returns the swept amount,
    /// or `0` immediately when there is nothing to sweep.
    #[payable]
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<PromiseOrValue<U128>, BlindBoxError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.start_withdrawal(&actor_id)
    }

    // Funds invariant: proceeds were zeroed before the transfer; only a failed transfer restores them.
    #[private]
    pub fn on_withdraw(&mut self, operator_id: AccountId, receiver_id: AccountId, amount: U128) -> U128 {
        let succeeded =
            env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok();
        self.settle_withdrawal(&operator_id, &receiver_id, amount.0, succeeded)
    }
}

impl Contract {
    pub(crate) fn start_withdrawal(
        &mut self,
        actor_id: &AccountId,
    ) -> Result<PromiseOrValue<U128>, BlindBoxError> {
        self.check_operator(actor_id)?;
        self.check_not_withdrawing()?;

        let amount = self.proceeds;
        if amount == 0 {
            return Ok(PromiseOrValue::Value(U128(0)));
        }

        // Guard stays up until `on_withdraw` runs.
        self.proceeds = 0;
        self.withdrawal_in_flight = true;

        let receiver_id = self.owner_id.clone();
        Ok(Promise::new(receiver_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK_TGAS))
                    .on_withdraw(actor_id.clone(), receiver_id, U128(amount)),
            )
            .into())
    }

    pub(crate) fn settle_withdrawal(
        &mut self,
        operator_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
        succeeded: bool,
    ) -> U128 {
        self.withdrawal_in_flight = false;
        if succeeded {
            events::emit_withdraw(operator_id, receiver_id, amount);
            return U128(amount);
        }
        self.proceeds = self.proceeds.saturating_add(amount);
        events::emit_withdraw_failed(receiver_id, amount);
        U128(0)
    }
}
