/*
 * replacement_policy.rs
 *
 * This file defines the trait for page replacement policies. The engine owns
 * the frame set; a policy only tracks its own bookkeeping per frame slot and
 * names the slot to overwrite when memory is full.
 */

pub trait ReplacementPolicy {
    /// Called after every reference, hit or fault, with the slot that now
    /// holds the referenced page and the reference position.
    fn record_access(&mut self, slot: usize, position: usize);

    /// Called only when the reference at `position` faults and every slot is
    /// occupied. Returns the slot whose page is evicted.
    fn choose_victim(&mut self, position: usize) -> usize;
}
