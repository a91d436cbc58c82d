use thiserror::Error;

/// Errors reported by the simulation engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid board: {width}x{height} px with cell size {cell_size} yields an empty grid")]
    InvalidConfiguration {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("pattern '{name}' does not fit when placed at ({row}, {col})")]
    PatternOutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
