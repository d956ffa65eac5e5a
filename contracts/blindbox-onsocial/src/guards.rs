use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), BlindBoxError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(BlindBoxError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub fn is_operator(&self, account_id: &AccountId) -> bool {
        account_id == &self.owner_id
    }

    pub(crate) fn check_operator(&self, actor_id: &AccountId) -> Result<(), BlindBoxError> {
        if !self.is_operator(actor_id) {
            return Err(BlindBoxError::only_operator());
        }
        Ok(())
    }

    pub(crate) fn check_phase(&self, expected: Phase) -> Result<(), BlindBoxError> {
        if self.phase != expected {
            return Err(BlindBoxError::wrong_phase(expected, self.phase));
        }
        Ok(())
    }

    pub(crate) fn check_purchase_window(&self) -> Result<(), BlindBoxError> {
        let open = match self.config.purchase_window {
            PurchaseWindow::UntilReveal => self.phase != Phase::Revealed,
            PurchaseWindow::SaleOnly => self.phase == Phase::Sale,
        };
        if !open {
            return Err(BlindBoxError::Phase(format!(
                "Purchases are closed in phase {}",
                self.phase
            )));
        }
        Ok(())
    }

    pub(crate) fn check_not_withdrawing(&self) -> Result<(), BlindBoxError> {
        if self.withdrawal_in_flight {
            return Err(BlindBoxError::ReentrancyDetected(
                "A withdrawal transfer is still outstanding".into(),
            ));
        }
        Ok(())
    }
}
