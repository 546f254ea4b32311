use std::process;

use clap::Parser;
use log::debug;

use pagesim::{
    params::SimParams,
    prelude::{compare_all, Session, SimStatus, StepRecord},
    utils::init_logger,
};

fn main() {
    init_logger();
    let params = SimParams::parse();
    debug!("Parameters:\n{}", params);

    if let Err(e) = run(&params) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(params: &SimParams) -> Result<(), SimStatus> {
    let refs = params.references()?;
    println!("References ({}): {}", refs.len(), join(&refs));

    if params.compare {
        let comparison = compare_all(&refs, params.frames)?;
        println!("Frames: {}", params.frames);
        print!("{}", comparison);
        if let Some(best) = comparison.best() {
            println!("Fewest faults: {}", best);
        }
        return Ok(());
    }

    let policy = params.policy()?;
    let mut session = Session::new(refs, params.frames, policy)?;
    let summary = session.run().summary();
    println!("Policy: {}, frames: {}", policy, params.frames);

    if params.steps && summary.references() > 0 {
        let cursor = session.cursor_mut()?;
        loop {
            print_step(cursor.current()?, &cursor.slots()?, cursor.faults_so_far()?);
            if cursor.is_at_end() {
                break;
            }
            cursor.advance()?;
        }
    }

    println!("{}", summary);
    Ok(())
}

fn print_step(step: &StepRecord<u32>, slots: &[Option<&u32>], faults: usize) {
    let slots: Vec<String> = slots
        .iter()
        .map(|s| s.map_or_else(|| "-".to_string(), |p| p.to_string()))
        .collect();
    let evicted = step
        .evicted
        .map(|p| format!(" (evicted {})", p))
        .unwrap_or_default();
    println!(
        "{:>4}  ref={:<4} [{}]  {}{}  faults so far: {}",
        step.index + 1,
        step.page,
        slots.join(" | "),
        step.outcome,
        evicted,
        faults
    );
}

fn join(refs: &[u32]) -> String {
    refs.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
