use crate::*;

#[near]
impl Contract {
    pub fn get_phase(&self) -> Phase {
        self.phase
    }

    pub fn get_config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn get_metadata(&self) -> &CollectionMetadata {
        &self.metadata
    }

    pub fn remaining_supply(&self) -> u32 {
        self.allocation.remaining()
    }

    pub fn issued_count(&self) -> u32 {
        self.allocation.issued_count()
    }

    pub fn get_proceeds(&self) -> U128 {
        U128(self.proceeds)
    }

    pub fn is_withdrawal_in_flight(&self) -> bool {
        self.withdrawal_in_flight
    }

    pub fn get_collection_stats(&self) -> CollectionStats {
        CollectionStats {
            phase: self.phase,
            supply_cap: self.allocation.supply_cap(),
            issued_count: self.allocation.issued_count(),
            remaining: self.allocation.remaining(),
            unit_price: self.config.unit_price,
            per_buyer_cap: self.config.per_buyer_cap,
            purchase_window: self.config.purchase_window,
            proceeds: U128(self.proceeds),
            revealed_base_uri: (!self.revealed_base_uri.is_empty())
                .then(|| self.revealed_base_uri.clone()),
        }
    }
}
