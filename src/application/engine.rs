use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::BoardConfig;
use crate::domain::{Cell, EngineError, Grid, Pattern, Result};

/// How the next generation is computed.
/// Both modes produce identical grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows spread across the rayon pool
    Parallel,
}

/// GridEngine owns the cell matrix and is the only thing that mutates it.
///
/// Every operation runs to completion before returning. Readers get either
/// a shared borrow (`grid`) or an owned copy (`snapshot`), so a renderer can
/// never observe a half-applied step.
pub struct GridEngine {
    config: BoardConfig,
    grid: Grid,
    rng: StdRng,
    mode: StepMode,
    generation: u64,
}

impl GridEngine {
    /// Create an engine with an all-dead grid, seeding randomness from the OS
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine whose `randomize` is reproducible
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BoardConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let (rows, cols) = (config.rows(), config.cols());
        info!(
            "engine created: {}x{} px, cell size {} -> {} rows x {} cols",
            config.width, config.height, config.cell_size, rows, cols
        );
        Ok(Self {
            config,
            grid: Grid::new(rows, cols),
            rng,
            mode: StepMode::default(),
            generation: 0,
        })
    }

    /// Select the stepping strategy (builder pattern)
    pub fn with_step_mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }

    /// Change the stepping strategy in place
    pub fn set_step_mode(&mut self, mode: StepMode) {
        self.mode = mode;
    }

    /// Current stepping strategy
    pub fn step_mode(&self) -> StepMode {
        self.mode
    }

    /// Board configuration the engine was built from
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.grid.dimensions().0
    }

    /// Number of grid columns
    pub fn cols(&self) -> usize {
        self.grid.dimensions().1
    }

    /// Generations stepped since construction or the last clear/randomize
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Map a pixel position to `(row, col)`: the row comes from `y`, the column from `x`
    pub fn pixel_to_cell(&self, x: u32, y: u32) -> Result<(usize, usize)> {
        let row = (y / self.config.cell_size) as usize;
        let col = (x / self.config.cell_size) as usize;
        self.cell_state(row, col).map(|_| (row, col))
    }

    /// Flip the cell under a pixel position
    pub fn toggle_cell(&mut self, x: u32, y: u32) -> Result<()> {
        let (row, col) = self.pixel_to_cell(x, y)?;
        let cell = self.grid.toggle(row, col)?;
        debug!("toggled ({row}, {col}) -> {cell:?}");
        Ok(())
    }

    /// State of the cell at `(row, col)`
    pub fn cell_state(&self, row: usize, col: usize) -> Result<Cell> {
        self.grid.get(row, col).ok_or(EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Overwrite the cell at `(row, col)`
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.grid.set(row, col, cell)
    }

    /// Live cells among the up-to-8 neighbors; the grid does not wrap
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.grid.live_neighbors(row, col)
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        debug!("grid cleared");
    }

    /// Clear, then seed from the engine's own generator
    pub fn randomize(&mut self) {
        randomize_grid(&mut self.grid, &mut self.rng);
        self.generation = 0;
        debug!("grid randomized, population {}", self.grid.population());
    }

    /// Clear, then seed from a caller-supplied generator.
    ///
    /// Each cell is decided by two coin flips: the first leaves it dead on
    /// tails, the second picks dead or alive. A cell ends up alive with
    /// probability 1/4.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        randomize_grid(&mut self.grid, rng);
        self.generation = 0;
        debug!("grid randomized, population {}", self.grid.population());
    }

    /// Stamp a preset with its top-left corner at `(row, col)`
    pub fn place_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) -> Result<()> {
        pattern.place_on(&mut self.grid, row, col)?;
        debug!("placed {} at ({row}, {col})", pattern.name);
        Ok(())
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.grid = match self.mode {
            StepMode::Serial => self.grid.evolve(),
            StepMode::Parallel => self.grid.evolve_parallel(),
        };
        self.generation += 1;
        trace!("generation {} population {}", self.generation, self.grid.population());
    }

    /// Read-only view of the current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current grid, safe to hand to another thread
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Iterate over all cells with their `(row, col)` positions
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid.iter_cells()
    }
}

fn randomize_grid<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.clear();
    grid.fill_with(|| {
        if rng.random_bool(0.5) {
            Cell::from(rng.random_bool(0.5))
        } else {
            Cell::Dead
        }
    });
}
