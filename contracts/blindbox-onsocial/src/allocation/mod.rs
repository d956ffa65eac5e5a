mod engine;
mod entropy;

pub use engine::AllocationEngine;
pub(crate) use entropy::draw_seed;
