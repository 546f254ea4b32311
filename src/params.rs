use clap::Parser;

use crate::{
    random::RandomRefs,
    reference::{parse_references, PageId},
    replacement::Policy,
    status::SimStatus,
};

pub const DEFAULT_REFERENCES: &str = "7 0 1 2 0 3 0 4 2 3 0 3 2";

#[derive(Debug, Parser)]
#[clap(name = "pagesim", about = "Page replacement simulator (FIFO, LRU, Optimal)")]
pub struct SimParams {
    /// Reference string, space or comma separated.
    #[clap(short = 'r', long = "refs", default_value = DEFAULT_REFERENCES)]
    pub refs: String,
    /// Number of physical frames.
    #[clap(short = 'f', long = "frames", default_value = "3")]
    pub frames: usize,
    /// Replacement policy: FIFO, LRU or Optimal.
    #[clap(short = 'p', long = "policy", default_value = "LRU")]
    pub policy: String,
    /// Run every policy and print a comparison table.
    #[clap(short = 'c', long = "compare")]
    pub compare: bool,
    /// Print every step of the trace.
    #[clap(short = 's', long = "steps")]
    pub steps: bool,
    /// Generate this many random references instead of using --refs.
    #[clap(short = 'n', long = "random_refs")]
    pub random_refs: Option<usize>,
    /// Number of distinct pages for random references.
    #[clap(short = 'g', long = "num_pages", default_value = "10")]
    pub num_pages: PageId,
    /// Probability of staying in the working set for random references.
    /// Zero gives uniform references.
    #[clap(short = 'l', long = "locality", default_value = "0")]
    pub locality: f64,
}

impl SimParams {
    pub fn policy(&self) -> Result<Policy, SimStatus> {
        Ok(self.policy.parse()?)
    }

    pub fn references(&self) -> Result<Vec<PageId>, SimStatus> {
        match self.random_refs {
            Some(n) if self.locality > 0.0 => {
                let working_set = (self.num_pages / 4).max(1);
                Ok(RandomRefs::with_locality(n, self.num_pages, working_set, self.locality)
                    .as_slice()
                    .to_vec())
            }
            Some(n) => Ok(RandomRefs::uniform(n, self.num_pages).as_slice().to_vec()),
            None => parse_references(&self.refs),
        }
    }
}

impl std::fmt::Display for SimParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = String::new();
        result.push_str(&format!("{:<20}: {}\n", "refs", self.refs));
        result.push_str(&format!("{:<20}: {}\n", "frames", self.frames));
        result.push_str(&format!("{:<20}: {}\n", "policy", self.policy));
        result.push_str(&format!("{:<20}: {}\n", "compare", self.compare));
        result.push_str(&format!("{:<20}: {}\n", "steps", self.steps));
        result.push_str(&format!("{:<20}: {:?}\n", "random_refs", self.random_refs));
        result.push_str(&format!("{:<20}: {}\n", "num_pages", self.num_pages));
        result.push_str(&format!("{:<20}: {}\n", "locality", self.locality));
        write!(f, "{}", result)
    }
}
