use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub title: Option<String>,
    pub reference: Option<String>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    pub metadata: Option<TokenMetadata>,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct ContractMetadataView {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
}

impl Contract {
    /// Pre-reveal URI until the item's flag flips, then revealed base + decimal id.
    pub(crate) fn item_uri(&self, item_id: u32) -> Result<String, BlindBoxError> {
        if !self.tokens.exists(item_id) {
            return Err(BlindBoxError::item_not_found(item_id));
        }
        // Revealed flags are only set once a non-empty base exists.
        if self.revealed.contains(&item_id) && !self.revealed_base_uri.is_empty() {
            return Ok(format!("{}{}", self.revealed_base_uri, item_id));
        }
        Ok(self.metadata.unrevealed_uri.clone())
    }

    pub(crate) fn token_view(&self, item_id: u32) -> Option<Token> {
        let owner_id = self.tokens.owner_of(item_id)?.clone();
        let reference = self.item_uri(item_id).ok();
        Some(Token {
            token_id: item_id.to_string(),
            owner_id,
            metadata: Some(TokenMetadata {
                title: Some(format!("{} #{}", self.metadata.name, item_id)),
                reference,
            }),
        })
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn token_uri(&self, item_id: u32) -> Result<String, BlindBoxError> {
        self.item_uri(item_id)
    }

    pub fn is_item_revealed(&self, item_id: u32) -> bool {
        self.revealed.contains(&item_id)
    }

    pub fn nft_metadata(&self) -> ContractMetadataView {
        ContractMetadataView {
            spec: NFT_METADATA_SPEC.to_string(),
            name: self.metadata.name.clone(),
            symbol: self.metadata.symbol.clone(),
            icon: self.metadata.icon.clone(),
            base_uri: (!self.revealed_base_uri.is_empty()).then(|| self.revealed_base_uri.clone()),
        }
    }
}
