use super::replacement_policy::ReplacementPolicy;

// Round-robin cursor over frame slots. Hits never move it.
pub struct FifoPolicy {
    cursor: usize,
    frame_count: usize,
}

impl FifoPolicy {
    pub fn new(frame_count: usize) -> Self {
        FifoPolicy {
            cursor: 0,
            frame_count,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn record_access(&mut self, _slot: usize, _position: usize) {}

    fn choose_victim(&mut self, _position: usize) -> usize {
        let victim = self.cursor;
        self.cursor = (self.cursor + 1) % self.frame_count;
        victim
    }
}
