use near_sdk::{AccountId, env};

use crate::ENTROPY_TIME_BUCKET_NS;

/// Seed for a single draw, hashed from inputs the buyer can see: block time
/// bucketed to seconds, the live pool size, and the buyer's account.
///
/// This is fairness among ordinary buyers, not unpredictability. A validator
/// that controls block timing, or anyone who can compute these inputs before
/// the call lands, can steer which identifier is drawn.
pub(crate) fn draw_seed(remaining: u32, buyer_id: &AccountId) -> u64 {
    let bucket = env::block_timestamp() / ENTROPY_TIME_BUCKET_NS;

    let mut preimage = Vec::with_capacity(12 + buyer_id.as_str().len());
    preimage.extend_from_slice(&bucket.to_le_bytes());
    preimage.extend_from_slice(&remaining.to_le_bytes());
    preimage.extend_from_slice(buyer_id.as_bytes());

    let digest = env::sha256_array(&preimage);
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(word)
}
