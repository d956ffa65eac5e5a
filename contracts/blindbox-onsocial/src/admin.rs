use crate::*;

#[near]
impl Contract {
    /// Aborts deployment on invalid configuration; nothing is written.
    #[init]
    pub fn new(
        owner_id: AccountId,
        metadata: CollectionMetadata,
        config: CollectionConfig,
    ) -> Self {
        match Self::try_new(owner_id, metadata, config) {
            Ok(contract) => contract,
            Err(err) => env::panic_str(&err.to_string()),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), BlindBoxError> {
        crate::guards::check_one_yocto()?;
        self.check_operator(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(BlindBoxError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }
}

impl Contract {
    pub(crate) fn try_new(
        owner_id: AccountId,
        metadata: CollectionMetadata,
        config: CollectionConfig,
    ) -> Result<Self, BlindBoxError> {
        validation::validate_config(&config)?;
        validation::validate_metadata(&metadata)?;

        events::emit_collection_created(
            &owner_id,
            &metadata.name,
            metadata.icon.as_deref(),
            config.supply_cap,
            config.per_buyer_cap,
            config.unit_price,
        );

        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            allocation: AllocationEngine::new(config.supply_cap),
            config,
            metadata,
            phase: Phase::PreSale,
            revealed_base_uri: String::new(),
            revealed: LookupSet::new(StorageKey::RevealedItems),
            tokens: TokenLedger::new(),
            proceeds: 0,
            withdrawal_in_flight: false,
        })
    }
}
