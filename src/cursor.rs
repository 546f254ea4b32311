use std::sync::Arc;

use crate::{
    engine::{StepRecord, Trace},
    status::SimStatus,
};

/// Read-only walk over a computed trace, one step at a time.
///
/// The cursor starts on the first step. `advance` on the last step is a
/// no-op that returns the last step again. The trace is shared, never
/// copied or recomputed; a cursor is not meant to be moved from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct StepCursor<P> {
    trace: Arc<Trace<P>>,
    position: usize,
}

impl<P> StepCursor<P> {
    pub fn new(trace: Arc<Trace<P>>) -> Self {
        StepCursor { trace, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn trace(&self) -> &Trace<P> {
        &self.trace
    }

    pub fn current(&self) -> Result<&StepRecord<P>, SimStatus> {
        self.trace.get(self.position).ok_or(SimStatus::EmptyTrace)
    }

    pub fn advance(&mut self) -> Result<&StepRecord<P>, SimStatus> {
        if self.trace.is_empty() {
            return Err(SimStatus::EmptyTrace);
        }
        if !self.is_at_end() {
            self.position += 1;
        }
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    /// Faults up to and including the current step.
    pub fn faults_so_far(&self) -> Result<usize, SimStatus> {
        self.current()?;
        Ok(self.trace.faults_up_to(self.position))
    }

    /// Current frame set padded with `None` for frames not yet filled.
    pub fn slots(&self) -> Result<Vec<Option<&P>>, SimStatus> {
        let frame_count = self.trace.frame_count();
        Ok(self.current()?.slots(frame_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::simulate, replacement::Policy};

    const REFS: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    fn cursor_for(refs: &[u32], policy: Policy) -> StepCursor<u32> {
        StepCursor::new(simulate(refs, 3, policy).unwrap().shared_trace())
    }

    #[test]
    fn test_walk_reproduces_trace() {
        for policy in Policy::ALL {
            let result = simulate(&REFS, 3, policy).unwrap();
            let mut cursor = StepCursor::new(result.shared_trace());
            let mut walked = vec![cursor.current().unwrap().clone()];
            for _ in 1..REFS.len() {
                walked.push(cursor.advance().unwrap().clone());
            }
            assert_eq!(walked.as_slice(), result.trace().steps());
            assert!(cursor.is_at_end());
        }
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = cursor_for(&REFS, Policy::Fifo);
        for _ in 0..REFS.len() + 5 {
            cursor.advance().unwrap();
        }
        assert_eq!(cursor.position(), REFS.len() - 1);
        assert_eq!(cursor.current().unwrap().index, REFS.len() - 1);
    }

    #[test]
    fn test_reset() {
        let mut cursor = cursor_for(&REFS, Policy::Lru);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.position(), 2);
        cursor.reset();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current().unwrap().page, 1);
    }

    #[test]
    fn test_empty_trace() {
        let mut cursor = cursor_for(&[], Policy::Optimal);
        assert_eq!(cursor.current().unwrap_err(), SimStatus::EmptyTrace);
        assert_eq!(cursor.advance().unwrap_err(), SimStatus::EmptyTrace);
        assert_eq!(cursor.slots().unwrap_err(), SimStatus::EmptyTrace);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_single_step_trace() {
        let mut cursor = cursor_for(&[9], Policy::Fifo);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().unwrap().page, 9);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_faults_so_far_and_slots() {
        let mut cursor = cursor_for(&REFS, Policy::Fifo);
        assert_eq!(cursor.faults_so_far().unwrap(), 1);
        assert_eq!(cursor.slots().unwrap(), vec![Some(&1), None, None]);
        for _ in 0..7 {
            cursor.advance().unwrap();
        }
        // step 8 (ref 1) is the first hit
        assert!(cursor.current().unwrap().outcome.is_hit());
        assert_eq!(cursor.faults_so_far().unwrap(), 7);
        assert_eq!(cursor.slots().unwrap(), vec![Some(&5), Some(&1), Some(&2)]);
    }
}
