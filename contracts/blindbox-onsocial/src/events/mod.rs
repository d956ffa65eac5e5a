mod builder;
mod types;

mod collection;
mod contract;
pub mod nep171;

pub use collection::*;
pub use contract::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const COLLECTION: &str = "COLLECTION_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
