use crate::allocation::draw_seed;
use crate::*;

#[near]
impl Contract {
    /// Buys `quantity` blind items; the attached deposit is the payment.
    /// Overpayment is kept in proceeds, not refunded.
    #[payable]
    #[handle_result]
    pub fn purchase(&mut self, quantity: u32) -> Result<Vec<u32>, BlindBoxError> {
        let buyer_id = env::predecessor_account_id();
        let payment = env::attached_deposit().as_yoctonear();
        self.purchase_items(&buyer_id, quantity, payment)
    }
}

impl Contract {
    pub(crate) fn purchase_items(
        &mut self,
        buyer_id: &AccountId,
        quantity: u32,
        payment: u128,
    ) -> Result<Vec<u32>, BlindBoxError> {
        // Check order is part of the interface: callers rely on which error fires first.
        if quantity == 0 {
            return Err(BlindBoxError::InvalidQuantity(
                "Quantity must be at least 1".into(),
            ));
        }

        self.check_purchase_window()?;

        let held = self.tokens.balance_of(buyer_id);
        if held.saturating_add(quantity) > self.config.per_buyer_cap {
            return Err(BlindBoxError::CapExceeded(format!(
                "Holding {}, requesting {}, cap {}",
                held, quantity, self.config.per_buyer_cap
            )));
        }

        let remaining = self.allocation.remaining();
        if remaining < quantity {
            return Err(BlindBoxError::SupplyExhausted(format!(
                "Only {} items remaining",
                remaining
            )));
        }

        let total_price = self
            .config
            .unit_price
            .0
            .checked_mul(quantity as u128)
            .ok_or_else(|| BlindBoxError::InsufficientPayment("Total price overflows".into()))?;
        if payment < total_price {
            return Err(BlindBoxError::InsufficientPayment(format!(
                "Required {}, got {}",
                total_price, payment
            )));
        }

        let proceeds = self
            .proceeds
            .checked_add(payment)
            .ok_or_else(|| BlindBoxError::Internal("Proceeds overflow".into()))?;

        let old_count = self.allocation.issued_count();
        let mut item_ids = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            let seed = draw_seed(self.allocation.remaining(), buyer_id);
            let item_id = self.allocation.assign_next(seed).ok_or_else(|| {
                BlindBoxError::Internal("Allocation pool drained mid-purchase".into())
            })?;
            self.tokens.create(item_id, buyer_id)?;
            item_ids.push(item_id);
        }
        self.proceeds = proceeds;

        events::emit_items_minted(buyer_id, old_count, self.allocation.issued_count());
        events::emit_purchase(&events::Purchase {
            buyer_id,
            quantity,
            total_price: U128(total_price),
            paid: U128(payment),
            item_ids: &item_ids,
        });
        Ok(item_ids)
    }
}
