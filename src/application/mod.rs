mod engine;
mod scheduler;

pub use engine::{GridEngine, StepMode};
pub use scheduler::{Scheduler, DEFAULT_INTERVAL};
