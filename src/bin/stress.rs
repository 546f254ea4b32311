use std::{
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use log::{error, info};

use pagesim::{
    prelude::{compare_all, simulate, Policy, SimulationResult},
    random::{gen_random_int, RandomRefs},
    utils::init_logger,
};

/// Runs random workloads through every policy and checks the trace
/// invariants. The first failing workload is written to `--dump`.
#[derive(Debug, Parser)]
struct StressParams {
    /// Number of random workloads.
    #[clap(short = 'i', long = "iterations", default_value = "1000")]
    iterations: usize,
    /// References per workload.
    #[clap(short = 'n', long = "num_refs", default_value = "500")]
    num_refs: usize,
    /// Distinct pages per workload.
    #[clap(short = 'g', long = "num_pages", default_value = "16")]
    num_pages: u32,
    /// Largest frame count to try.
    #[clap(short = 'f', long = "max_frames", default_value = "8")]
    max_frames: usize,
    /// Where to write a failing workload.
    #[clap(short = 'd', long = "dump", default_value = "refs.dat")]
    dump: PathBuf,
    /// Replay a dumped workload instead of generating new ones.
    #[clap(long = "replay")]
    replay: Option<PathBuf>,
}

fn check_result(
    refs: &[u32],
    frame_count: usize,
    result: &SimulationResult<u32>,
) -> Result<(), String> {
    let trace = result.trace();
    if trace.len() != refs.len() {
        return Err(format!("trace length {} != {}", trace.len(), refs.len()));
    }
    if result.hits() + result.faults() != refs.len() {
        return Err("hits + faults != references".to_string());
    }
    let mut before: &[u32] = &[];
    for step in trace.iter() {
        if step.frames.len() > frame_count {
            return Err(format!("step {} holds {} frames", step.index, step.frames.len()));
        }
        if step.outcome.is_hit() != before.contains(&step.page) {
            return Err(format!("step {} misclassified as {}", step.index, step.outcome));
        }
        before = &step.frames;
    }
    Ok(())
}

fn check_workload(refs: &[u32], frame_count: usize) -> Result<(), String> {
    let comparison = compare_all(refs, frame_count).map_err(|e| e.to_string())?;
    let optimal = comparison
        .get(Policy::Optimal)
        .map(|s| s.faults)
        .unwrap_or_default();
    for policy in Policy::ALL {
        let result = simulate(refs, frame_count, policy).map_err(|e| e.to_string())?;
        check_result(refs, frame_count, &result).map_err(|e| format!("{}: {}", policy, e))?;
        if comparison.get(policy) != Some(&result.summary()) {
            return Err(format!("{}: comparison disagrees with single run", policy));
        }
        if result.faults() < optimal {
            return Err(format!(
                "{} beat Optimal ({} < {})",
                policy,
                result.faults(),
                optimal
            ));
        }
    }
    Ok(())
}

fn replay(path: &Path, max_frames: usize) {
    let refs = match RandomRefs::load(path) {
        Ok(refs) => refs,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    println!("Replaying {} references from {:?}", refs.len(), path);
    for frame_count in 1..=max_frames {
        match check_workload(refs.as_slice(), frame_count) {
            Ok(()) => println!("frames={}: ok", frame_count),
            Err(e) => println!("frames={}: FAILED {}", frame_count, e),
        }
    }
}

fn main() {
    init_logger();
    let params = StressParams::parse();
    let max_frames = params.max_frames.max(1);

    if let Some(path) = &params.replay {
        replay(path, max_frames);
        return;
    }

    for i in 0..params.iterations {
        let refs = if i % 2 == 0 {
            RandomRefs::uniform(params.num_refs, params.num_pages)
        } else {
            RandomRefs::with_locality(params.num_refs, params.num_pages, 4, 0.8)
        };
        let frame_count = gen_random_int(1, max_frames);
        if let Err(e) = check_workload(refs.as_slice(), frame_count) {
            error!("Iteration {} (frames={}) failed: {}", i, frame_count, e);
            if let Err(e) = refs.save(&params.dump) {
                error!("{}", e);
            }
            println!("FAILED, workload written to {:?}", params.dump);
            process::exit(1);
        }
        info!("Iteration {} ok", i);
    }
    println!("SUCCESS");
}
