use std::{collections::BTreeMap, fmt::Debug, hash::Hash, thread};

use log::debug;

use crate::{
    engine::{run, SimConfig, Summary},
    replacement::Policy,
    status::SimStatus,
};

/// Per-policy hit and fault counts over one reference sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    summaries: BTreeMap<Policy, Summary>,
}

impl Comparison {
    pub fn get(&self, policy: Policy) -> Option<&Summary> {
        self.summaries.get(&policy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Policy, &Summary)> {
        self.summaries.iter()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Policy with the fewest faults. Ties go to the earlier policy.
    pub fn best(&self) -> Option<Policy> {
        self.summaries
            .iter()
            .min_by_key(|(_, s)| s.faults)
            .map(|(p, _)| *p)
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<10}{:>8}{:>8}{:>10}{:>10}",
            "policy", "hits", "faults", "hit %", "fault %"
        )?;
        for (policy, s) in self.summaries.iter() {
            writeln!(
                f,
                "{:<10}{:>8}{:>8}{:>10.1}{:>10.1}",
                policy.name(),
                s.hits,
                s.faults,
                s.hit_ratio * 100.0,
                s.fault_ratio * 100.0
            )?;
        }
        Ok(())
    }
}

/// Runs every policy in `policies` over the same references through the
/// regular engine, keeping only the counts.
pub fn compare<P>(
    references: &[P],
    frame_count: usize,
    policies: &[Policy],
) -> Result<Comparison, SimStatus>
where
    P: Clone + Eq + Hash + Debug,
{
    let configs = configs(frame_count, policies)?;
    let summaries: BTreeMap<Policy, Summary> = configs
        .into_iter()
        .map(|config| (config.policy, run(references, config).summary()))
        .collect();
    let comparison = Comparison { summaries };
    debug!(
        "Compared {} policies over {} references",
        comparison.len(),
        references.len()
    );
    Ok(comparison)
}

pub fn compare_all<P>(references: &[P], frame_count: usize) -> Result<Comparison, SimStatus>
where
    P: Clone + Eq + Hash + Debug,
{
    compare(references, frame_count, &Policy::ALL)
}

/// Same as [`compare`], one scoped thread per policy.
pub fn compare_parallel<P>(
    references: &[P],
    frame_count: usize,
    policies: &[Policy],
) -> Result<Comparison, SimStatus>
where
    P: Clone + Eq + Hash + Debug + Sync,
{
    let configs = configs(frame_count, policies)?;
    let summaries: BTreeMap<Policy, Summary> = thread::scope(|s| {
        let handles: Vec<_> = configs
            .into_iter()
            .map(|config| s.spawn(move || (config.policy, run(references, config).summary())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });
    Ok(Comparison { summaries })
}

fn configs(frame_count: usize, policies: &[Policy]) -> Result<Vec<SimConfig>, SimStatus> {
    policies
        .iter()
        .map(|&policy| SimConfig::new(frame_count, policy).map_err(SimStatus::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::simulate, random::RandomRefs, status::ConfigError};

    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_compare_belady_string() {
        let comparison = compare_all(&BELADY, 3).unwrap();
        assert_eq!(comparison.len(), 3);
        assert_eq!(comparison.get(Policy::Fifo).unwrap().faults, 9);
        assert_eq!(comparison.get(Policy::Lru).unwrap().faults, 10);
        let optimal = comparison.get(Policy::Optimal).unwrap();
        assert_eq!(optimal.faults, 7);
        assert_eq!(optimal.hits, 5);
        assert!((optimal.fault_ratio - 7.0 / 12.0).abs() < 1e-12);
        assert!((optimal.hit_ratio - 5.0 / 12.0).abs() < 1e-12);
        assert_eq!(comparison.best(), Some(Policy::Optimal));
    }

    #[test]
    fn test_compare_matches_simulate() {
        for _ in 0..30 {
            let refs = RandomRefs::with_locality(300, 20, 5, 0.7);
            let frame_count = crate::random::gen_random_int(1, 8);
            let comparison = compare_all(refs.as_slice(), frame_count).unwrap();
            for policy in Policy::ALL {
                let single = simulate(refs.as_slice(), frame_count, policy).unwrap();
                assert_eq!(comparison.get(policy), Some(&single.summary()));
            }
        }
    }

    #[test]
    fn test_compare_parallel_matches_compare() {
        let refs = RandomRefs::uniform(2000, 30);
        let sequential = compare_all(refs.as_slice(), 6).unwrap();
        let parallel = compare_parallel(refs.as_slice(), 6, &Policy::ALL).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_compare_subset() {
        let comparison = compare(&BELADY, 3, &[Policy::Lru]).unwrap();
        assert_eq!(comparison.len(), 1);
        assert!(comparison.get(Policy::Fifo).is_none());
    }

    #[test]
    fn test_compare_empty_references() {
        let comparison = compare_all::<u32>(&[], 3).unwrap();
        for (_, summary) in comparison.iter() {
            assert_eq!(summary.hits, 0);
            assert_eq!(summary.faults, 0);
            assert_eq!(summary.hit_ratio, 0.0);
            assert_eq!(summary.fault_ratio, 0.0);
        }
    }

    #[test]
    fn test_compare_zero_frames() {
        assert_eq!(
            compare_all(&BELADY, 0).unwrap_err(),
            SimStatus::InvalidConfiguration(ConfigError::ZeroFrames)
        );
    }

    #[test]
    fn test_comparison_display() {
        let text = compare_all(&BELADY, 3).unwrap().to_string();
        assert!(text.contains("FIFO"));
        assert!(text.contains("Optimal"));
        assert_eq!(text.lines().count(), 4);
    }
}
