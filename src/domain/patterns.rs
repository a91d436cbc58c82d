use super::{Cell, EngineError, Grid, Result};

/// A well-known seed that can be stamped onto the grid.
/// Offsets are `(row, col)` relative to the pattern's top-left corner.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Create a pattern from its live-cell offsets
    pub fn new(
        name: &'static str,
        description: &'static str,
        cells: &'static [(usize, usize)],
    ) -> Self {
        let rows = cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        Self { name, description, rows, cols, cells }
    }

    /// Whether the pattern fits on `grid` with its corner at `(row, col)`
    pub fn fits(&self, grid: &Grid, row: usize, col: usize) -> bool {
        let (rows, cols) = grid.dimensions();
        row.checked_add(self.rows).is_some_and(|end| end <= rows)
            && col.checked_add(self.cols).is_some_and(|end| end <= cols)
    }

    /// Stamp the pattern's live cells onto the grid. Cells outside the
    /// pattern's live set are left untouched. Nothing is written unless
    /// the whole pattern fits.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        if !self.fits(grid, row, col) {
            return Err(EngineError::PatternOutOfBounds { name: self.name, row, col });
        }
        for &(dr, dc) in self.cells {
            grid.set(row + dr, col + dc, Cell::Alive)?;
        }
        Ok(())
    }
}

/// Classic Game of Life seeds
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[
            (0, 0), (0, 1),
            (1, 0), (1, 1),
        ])
    }

    /// Beehive - still life
    pub fn beehive() -> Pattern {
        Pattern::new("Beehive", "Still life", &[
            (0, 1), (0, 2),
            (1, 0), (1, 3),
            (2, 1), (2, 2),
        ])
    }

    /// Blinker - period 2 oscillator (horizontal phase)
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[
            (0, 0), (0, 1), (0, 2),
        ])
    }

    pub fn toad() -> Pattern {
        Pattern::new("Toad", "Oscillator (period 2)", &[
            (0, 1), (0, 2), (0, 3),
            (1, 0), (1, 1), (1, 2),
        ])
    }

    pub fn beacon() -> Pattern {
        Pattern::new("Beacon", "Oscillator (period 2)", &[
            (0, 0), (0, 1),
            (1, 0),
            (2, 3),
            (3, 2), (3, 3),
        ])
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new("Glider", "Spaceship (period 4)", &[
            (0, 1),
            (1, 2),
            (2, 0), (2, 1), (2, 2),
        ])
    }

    /// R-pentomino - methuselah that keeps a small board busy
    pub fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", "Methuselah", &[
            (0, 1), (0, 2),
            (1, 0), (1, 1),
            (2, 1),
        ])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), beehive(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }
}
