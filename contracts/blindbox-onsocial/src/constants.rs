use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const MAX_SUPPLY_CAP: u32 = 100_000;
pub const MAX_URI_LEN: usize = 512;
pub const MAX_NAME_LEN: usize = 128;

// Gas bound: one bulk reveal call walks at most this many issued items.
pub const MAX_REVEAL_BATCH: u32 = 200;
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

// Draw entropy is bucketed to whole seconds.
pub const ENTROPY_TIME_BUCKET_NS: u64 = 1_000_000_000;

pub const GAS_WITHDRAW_CALLBACK_TGAS: u64 = 10;

pub const NFT_METADATA_SPEC: &str = "nft-2.0.0";
