mod purchase;
mod reveal;
mod withdraw;

use crate::guards::check_one_yocto;
use crate::*;

/// Collection phases; transitions only move forward.
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    PreSale,
    Sale,
    Revealed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::PreSale => "PreSale",
            Self::Sale => "Sale",
            Self::Revealed => "Revealed",
        };
        f.write_str(name)
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn activate_sale(&mut self) -> Result<(), BlindBoxError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.open_sale(&actor_id)
    }

    #[payable]
    #[handle_result]
    pub fn end_sale(&mut self, revealed_base_uri: String) -> Result<(), BlindBoxError> {
        check_one_yocto()?;
        let actor_id = env::predecessor_account_id();
        self.close_sale(&actor_id, revealed_base_uri)
    }
}

impl Contract {
    pub(crate) fn open_sale(&mut self, actor_id: &AccountId) -> Result<(), BlindBoxError> {
        self.check_operator(actor_id)?;
        self.check_phase(Phase::PreSale)?;

        self.phase = Phase::Sale;
        events::emit_sale_activated(actor_id);
        Ok(())
    }

    // The revealed base is written exactly once, here.
    pub(crate) fn close_sale(
        &mut self,
        actor_id: &AccountId,
        revealed_base_uri: String,
    ) -> Result<(), BlindBoxError> {
        self.check_operator(actor_id)?;
        self.check_phase(Phase::Sale)?;
        validation::validate_revealed_base(&revealed_base_uri)?;

        self.revealed_base_uri = revealed_base_uri;
        self.phase = Phase::Revealed;
        events::emit_sale_ended(
            actor_id,
            &self.revealed_base_uri,
            self.allocation.issued_count(),
        );
        Ok(())
    }
}
