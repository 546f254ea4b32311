use std::{fmt::Debug, hash::Hash};

use log::debug;

use crate::{
    compare::{compare_all, Comparison},
    cursor::StepCursor,
    engine::{run, SimConfig, SimulationResult, StepRecord},
    replacement::Policy,
    status::{ConfigError, SimStatus},
};

/// One simulation request: the references, the configuration, and once run,
/// the result plus a cursor over its trace. Sessions share nothing, so any
/// number of them can exist side by side.
pub struct Session<P> {
    references: Vec<P>,
    config: SimConfig,
    result: Option<SimulationResult<P>>,
    cursor: Option<StepCursor<P>>,
}

impl<P> Session<P>
where
    P: Clone + Eq + Hash + Debug,
{
    pub fn new(
        references: Vec<P>,
        frame_count: usize,
        policy: Policy,
    ) -> Result<Self, ConfigError> {
        Ok(Session {
            references,
            config: SimConfig::new(frame_count, policy)?,
            result: None,
            cursor: None,
        })
    }

    pub fn references(&self) -> &[P] {
        &self.references
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    pub fn result(&self) -> Option<&SimulationResult<P>> {
        self.result.as_ref()
    }

    /// Computes the trace and puts the cursor on its first step.
    pub fn run(&mut self) -> &SimulationResult<P> {
        let result = run(&self.references, self.config);
        self.cursor = Some(StepCursor::new(result.shared_trace()));
        self.result.insert(result)
    }

    /// Runs on first use, advances one step afterwards.
    pub fn step(&mut self) -> Result<&StepRecord<P>, SimStatus> {
        if self.cursor.is_none() {
            self.run();
            return self.current();
        }
        self.cursor_mut()?.advance()
    }

    pub fn current(&self) -> Result<&StepRecord<P>, SimStatus> {
        self.cursor()?.current()
    }

    pub fn cursor(&self) -> Result<&StepCursor<P>, SimStatus> {
        self.cursor.as_ref().ok_or(SimStatus::EmptyTrace)
    }

    pub fn cursor_mut(&mut self) -> Result<&mut StepCursor<P>, SimStatus> {
        self.cursor.as_mut().ok_or(SimStatus::EmptyTrace)
    }

    /// Runs every policy over this session's references and frame count.
    pub fn compare(&self) -> Result<Comparison, SimStatus> {
        compare_all(&self.references, self.config.frame_count)
    }

    /// Drops the result; the next `step` runs again from scratch.
    pub fn reset(&mut self) {
        debug!("Session reset ({} references)", self.references.len());
        self.result = None;
        self.cursor = None;
    }
}
