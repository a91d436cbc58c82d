mod cell;
mod error;
mod grid;
mod patterns;

pub use cell::Cell;
pub use error::{EngineError, Result};
pub use grid::Grid;
pub use patterns::{Pattern, presets};
