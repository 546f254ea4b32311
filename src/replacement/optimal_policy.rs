use std::{collections::HashMap, hash::Hash};

use super::replacement_policy::ReplacementPolicy;

/// Belady's optimal replacement: evict the resident page whose next use lies
/// farthest ahead, preferring pages that are never used again.
///
/// The next use of every position is computed once up front, so choosing a
/// victim costs O(frame_count) instead of a scan of the remaining references.
pub struct OptimalPolicy {
    next_use: Vec<Option<usize>>,
    // Next use of the page currently held in each slot.
    slot_next_use: Vec<Option<usize>>,
}

impl OptimalPolicy {
    pub fn new<P: Eq + Hash>(references: &[P], frame_count: usize) -> Self {
        let mut next_use = vec![None; references.len()];
        let mut upcoming: HashMap<&P, usize> = HashMap::new();
        for (position, page) in references.iter().enumerate().rev() {
            next_use[position] = upcoming.insert(page, position);
        }
        OptimalPolicy {
            next_use,
            slot_next_use: vec![None; frame_count],
        }
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn record_access(&mut self, slot: usize, position: usize) {
        self.slot_next_use[slot] = self.next_use[position];
    }

    fn choose_victim(&mut self, _position: usize) -> usize {
        let mut victim = 0;
        let mut farthest = 0;
        for (slot, next) in self.slot_next_use.iter().enumerate() {
            match next {
                None => return slot,
                Some(next) if *next > farthest => {
                    farthest = *next;
                    victim = slot;
                }
                Some(_) => {}
            }
        }
        victim
    }
}
