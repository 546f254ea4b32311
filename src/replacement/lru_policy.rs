use super::replacement_policy::ReplacementPolicy;

// Last reference position of the page held in each slot.
pub struct LruPolicy {
    last_seen: Vec<usize>,
}

impl LruPolicy {
    pub fn new(frame_count: usize) -> Self {
        LruPolicy {
            last_seen: vec![0; frame_count],
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    fn record_access(&mut self, slot: usize, position: usize) {
        self.last_seen[slot] = position;
    }

    fn choose_victim(&mut self, _position: usize) -> usize {
        // min_by_key keeps the first minimum, so ties go to the lowest slot.
        self.last_seen
            .iter()
            .enumerate()
            .min_by_key(|&(_, seen)| *seen)
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }
}
