mod fifo_policy;
mod lru_policy;
mod optimal_policy;
mod replacement_policy;

use std::{hash::Hash, str::FromStr};

use crate::status::ConfigError;

pub use fifo_policy::FifoPolicy;
pub use lru_policy::LruPolicy;
pub use optimal_policy::OptimalPolicy;
pub use replacement_policy::ReplacementPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Builds the bookkeeping for one run. Optimal needs to see the whole
    /// reference sequence up front.
    pub fn build<P: Eq + Hash>(
        &self,
        references: &[P],
        frame_count: usize,
    ) -> Box<dyn ReplacementPolicy> {
        match self {
            Policy::Fifo => Box::new(FifoPolicy::new(frame_count)),
            Policy::Lru => Box::new(LruPolicy::new(frame_count)),
            Policy::Optimal => Box::new(OptimalPolicy::new(references, frame_count)),
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_round_trip() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
        }
        assert_eq!("opt".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!(" lru ".parse::<Policy>().unwrap(), Policy::Lru);
    }

    #[test]
    fn test_unknown_policy() {
        assert_eq!(
            "clock".parse::<Policy>(),
            Err(ConfigError::UnknownPolicy("clock".to_string()))
        );
    }
}
