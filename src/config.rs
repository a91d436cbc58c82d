//! Board configuration.
//!
//! The board is described in pixels; the grid dimensions fall out of
//! the cell size. Values are fixed for the lifetime of an engine.

use crate::domain::{EngineError, Result};

/// Default board width in pixels
pub const DEFAULT_WIDTH: u32 = 500;
/// Default board height in pixels
pub const DEFAULT_HEIGHT: u32 = 500;
/// Default cell edge in pixels
pub const DEFAULT_CELL_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl BoardConfig {
    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self { width, height, cell_size }
    }

    /// `floor(height / cell_size)`, zero when the cell size is zero
    pub const fn rows(&self) -> usize {
        match self.cell_size {
            0 => 0,
            size => (self.height / size) as usize,
        }
    }

    /// `floor(width / cell_size)`, zero when the cell size is zero
    pub const fn cols(&self) -> usize {
        match self.cell_size {
            0 => 0,
            size => (self.width / size) as usize,
        }
    }

    /// Reject configurations that would produce an empty grid
    pub fn validate(&self) -> Result<()> {
        if self.rows() == 0 || self.cols() == 0 {
            return Err(EngineError::InvalidConfiguration {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_CELL_SIZE)
    }
}
