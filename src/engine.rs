use std::{fmt::Debug, hash::Hash, sync::Arc};

use log::{debug, trace};

use crate::{
    replacement::Policy,
    status::{ConfigError, SimStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Hit,
    Fault,
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit)
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Outcome::Fault)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Hit => write!(f, "HIT"),
            Outcome::Fault => write!(f, "PAGE FAULT"),
        }
    }
}

/// Frame count and policy for one simulation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub frame_count: usize,
    pub policy: Policy,
}

impl SimConfig {
    pub fn new(frame_count: usize, policy: Policy) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        Ok(SimConfig {
            frame_count,
            policy,
        })
    }
}

/// Outcome of processing one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord<P> {
    /// Position in the reference sequence.
    pub index: usize,
    pub page: P,
    /// Frame set after this reference, in slot order.
    pub frames: Vec<P>,
    pub outcome: Outcome,
    /// Slot that holds `page` after this step.
    pub slot: usize,
    /// Page overwritten by this step, if memory was full.
    pub evicted: Option<P>,
}

impl<P> StepRecord<P> {
    /// Frame set padded with `None` up to `frame_count` slots.
    pub fn slots(&self, frame_count: usize) -> Vec<Option<&P>> {
        let mut slots: Vec<Option<&P>> = self.frames.iter().map(Some).collect();
        slots.resize(frame_count.max(self.frames.len()), None);
        slots
    }
}

impl<P: std::fmt::Display> std::fmt::Display for StepRecord<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let frames: Vec<String> = self.frames.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "step {:>3}: ref={} [{}] {}",
            self.index + 1,
            self.page,
            frames.join(" | "),
            self.outcome
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<P> {
    frame_count: usize,
    steps: Vec<StepRecord<P>>,
}

impl<P> Trace<P> {
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepRecord<P>> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepRecord<P>> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[StepRecord<P>] {
        &self.steps
    }

    /// Number of faults in steps `0..=index`.
    pub fn faults_up_to(&self, index: usize) -> usize {
        self.steps
            .iter()
            .take(index.saturating_add(1))
            .filter(|s| s.outcome.is_fault())
            .count()
    }
}

impl<P> std::ops::Index<usize> for Trace<P> {
    type Output = StepRecord<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

/// Hit and fault counts of one run, without the trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub hits: usize,
    pub faults: usize,
    pub hit_ratio: f64,
    pub fault_ratio: f64,
}

impl Summary {
    pub fn new(hits: usize, faults: usize) -> Self {
        let total = hits + faults;
        let ratio = |n: usize| {
            if total == 0 {
                0.0
            } else {
                n as f64 / total as f64
            }
        };
        Summary {
            hits,
            faults,
            hit_ratio: ratio(hits),
            fault_ratio: ratio(faults),
        }
    }

    pub fn references(&self) -> usize {
        self.hits + self.faults
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hits: {} ({:.1}%), faults: {} ({:.1}%)",
            self.hits,
            self.hit_ratio * 100.0,
            self.faults,
            self.fault_ratio * 100.0
        )
    }
}

#[derive(Debug, Clone)]
pub struct SimulationResult<P> {
    pub policy: Policy,
    trace: Arc<Trace<P>>,
    hits: usize,
    faults: usize,
}

impl<P> SimulationResult<P> {
    pub fn trace(&self) -> &Trace<P> {
        &self.trace
    }

    /// Shared handle to the trace, for cursors that outlive the borrow.
    pub fn shared_trace(&self) -> Arc<Trace<P>> {
        Arc::clone(&self.trace)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn faults(&self) -> usize {
        self.faults
    }

    pub fn fault_ratio(&self) -> f64 {
        self.summary().fault_ratio
    }

    pub fn hit_ratio(&self) -> f64 {
        self.summary().hit_ratio
    }

    pub fn summary(&self) -> Summary {
        Summary::new(self.hits, self.faults)
    }
}

/// Runs `policy` over `references` with `frame_count` frames.
///
/// FIFO and LRU run in O(N·F). Optimal precomputes next uses in O(N) and
/// then also runs in O(N·F).
pub fn simulate<P>(
    references: &[P],
    frame_count: usize,
    policy: Policy,
) -> Result<SimulationResult<P>, SimStatus>
where
    P: Clone + Eq + Hash + Debug,
{
    let config = SimConfig::new(frame_count, policy)?;
    Ok(run(references, config))
}

/// Same as [`simulate`], resolving the policy by name first.
pub fn simulate_named<P>(
    references: &[P],
    frame_count: usize,
    policy: &str,
) -> Result<SimulationResult<P>, SimStatus>
where
    P: Clone + Eq + Hash + Debug,
{
    let policy: Policy = policy.parse()?;
    simulate(references, frame_count, policy)
}

pub(crate) fn run<P>(references: &[P], config: SimConfig) -> SimulationResult<P>
where
    P: Clone + Eq + Hash + Debug,
{
    let SimConfig {
        frame_count,
        policy,
    } = config;
    let mut bookkeeping = policy.build(references, frame_count);
    let mut frames: Vec<P> = Vec::with_capacity(frame_count);
    let mut steps = Vec::with_capacity(references.len());
    let mut faults = 0;

    for (index, page) in references.iter().enumerate() {
        let (slot, outcome, evicted) = match frames.iter().position(|p| p == page) {
            Some(slot) => (slot, Outcome::Hit, None),
            None if frames.len() < frame_count => {
                frames.push(page.clone());
                (frames.len() - 1, Outcome::Fault, None)
            }
            None => {
                let slot = bookkeeping.choose_victim(index);
                let evicted = std::mem::replace(&mut frames[slot], page.clone());
                (slot, Outcome::Fault, Some(evicted))
            }
        };
        bookkeeping.record_access(slot, index);
        if outcome.is_fault() {
            faults += 1;
        }
        trace!(
            "{} step {}: page {:?} -> slot {} {} (evicted {:?})",
            policy,
            index,
            page,
            slot,
            outcome,
            evicted
        );
        steps.push(StepRecord {
            index,
            page: page.clone(),
            frames: frames.clone(),
            outcome,
            slot,
            evicted,
        });
    }

    let hits = references.len() - faults;
    debug!(
        "{} simulated: references: {}, frames: {}, hits: {}, faults: {}",
        policy,
        references.len(),
        frame_count,
        hits,
        faults
    );
    SimulationResult {
        policy,
        trace: Arc::new(Trace {
            frame_count,
            steps,
        }),
        hits,
        faults,
    }
}
