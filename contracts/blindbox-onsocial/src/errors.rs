use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum BlindBoxError {
    Configuration(String),
    Unauthorized(String),
    Phase(String),
    InvalidQuantity(String),
    CapExceeded(String),
    SupplyExhausted(String),
    InsufficientPayment(String),
    NotFound(String),
    AlreadyRevealed(String),
    ReentrancyDetected(String),
    InvalidInput(String),
    InsufficientDeposit(String),
    Internal(String),
}

impl std::fmt::Display for BlindBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Phase(msg) => write!(f, "Phase error: {}", msg),
            Self::InvalidQuantity(msg) => write!(f, "Invalid quantity: {}", msg),
            Self::CapExceeded(msg) => write!(f, "Cap exceeded: {}", msg),
            Self::SupplyExhausted(msg) => write!(f, "Supply exhausted: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::AlreadyRevealed(msg) => write!(f, "Already revealed: {}", msg),
            Self::ReentrancyDetected(msg) => write!(f, "Reentrancy detected: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl BlindBoxError {
    pub fn item_not_found(item_id: u32) -> Self {
        Self::NotFound(format!("Item {} has not been issued", item_id))
    }
    pub fn only_operator() -> Self {
        Self::Unauthorized("Only the operator can perform this action".into())
    }
    pub fn wrong_phase(expected: crate::Phase, actual: crate::Phase) -> Self {
        Self::Phase(format!("Expected phase {}, current phase is {}", expected, actual))
    }
}
