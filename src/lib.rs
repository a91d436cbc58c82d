// Domain layer - Core simulation state and rules
pub mod domain;

// Application layer - Engine and scheduling
pub mod application;

// Configuration
pub mod config;

// Re-exports for convenience
pub use domain::{Cell, Grid, EngineError, Result, Pattern, presets};
pub use application::{GridEngine, Scheduler, StepMode};
pub use config::BoardConfig;
