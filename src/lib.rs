pub mod compare;
pub mod cursor;
pub mod engine;
pub mod params;
pub mod random;
pub mod reference;
pub mod replacement;
pub mod session;
pub mod status;
pub mod utils;

pub mod prelude {
    pub use crate::compare::{compare, compare_all, compare_parallel, Comparison};
    pub use crate::cursor::StepCursor;
    pub use crate::engine::{
        simulate, simulate_named, Outcome, SimConfig, SimulationResult, StepRecord, Summary,
        Trace,
    };
    pub use crate::reference::{parse_frame_count, parse_references, PageId};
    pub use crate::replacement::{Policy, ReplacementPolicy};
    pub use crate::session::Session;
    pub use crate::status::{ConfigError, SimStatus};
}
