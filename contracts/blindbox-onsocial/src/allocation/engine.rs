use near_sdk::near;
use near_sdk::store::LookupMap;

use crate::StorageKey;

/// Hands out every identifier in `[0, supply_cap)` exactly once, in random
/// order, without materializing the pool.
///
/// The pool is a virtual array of the `remaining` live slots. Slot `i` holds
/// `i` until a draw moves another value into it; moves are recorded in
/// `links` as slot -> slot redirections. A draw takes the value at a random
/// live slot and refills that slot with whatever the last live slot held,
/// then shrinks the array by one (swap-with-last over a sparse map).
#[near(serializers = [borsh])]
pub struct AllocationEngine {
    supply_cap: u32,
    issued_count: u32,
    // Absent entry: the slot holds its own index.
    links: LookupMap<u32, u32>,
}

impl AllocationEngine {
    pub fn new(supply_cap: u32) -> Self {
        Self {
            supply_cap,
            issued_count: 0,
            links: LookupMap::new(StorageKey::PermutationLinks),
        }
    }

    pub fn supply_cap(&self) -> u32 {
        self.supply_cap
    }

    pub fn issued_count(&self) -> u32 {
        self.issued_count
    }

    pub fn remaining(&self) -> u32 {
        self.supply_cap - self.issued_count
    }

    /// Draws the next identifier using `seed` to pick a live slot.
    ///
    /// Returns `None` when the pool is empty; callers check `remaining()`
    /// before drawing, so that is a broken invariant rather than a sell-out.
    pub fn assign_next(&mut self, seed: u64) -> Option<u32> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let slot = (seed % u64::from(remaining)) as u32;
        let last = remaining - 1;

        let drawn = self.resolve(slot);
        if slot != last {
            // Point at the terminal slot, not at `last`, so chains stay one hop.
            let tail = self.resolve(last);
            self.links.insert(slot, tail);
        }
        // `last` drops out of the live range and is never drawn again.
        self.links.remove(&last);

        self.issued_count += 1;
        Some(drawn)
    }

    /// Current value of `slot`: follows redirections until a slot with no
    /// entry, whose value is its own index.
    fn resolve(&self, slot: u32) -> u32 {
        let mut current = slot;
        while let Some(&next) = self.links.get(&current) {
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    #[cfg(test)]
    pub(crate) fn has_link(&self, slot: u32) -> bool {
        self.links.contains_key(&slot)
    }
}
