/// Cell is one unit of the grid.
/// Each cell is either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Compute the next state from the live-neighbor count:
    /// 1. Exactly 3 neighbors: alive, whatever the current state
    /// 2. Exactly 2 neighbors: unchanged
    /// 3. Anything else: dead
    pub const fn evolve(self, neighbors: u8) -> Self {
        match neighbors {
            3 => Cell::Alive,
            2 => self,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fewer_than_two_neighbors_kills() {
        for n in 0..2 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "alive with {n}");
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "dead with {n}");
        }
    }

    #[test]
    fn test_two_neighbors_keeps_current_state() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
    }

    #[test]
    fn test_three_neighbors_always_alive() {
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_crowding_kills() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "alive with {n}");
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "dead with {n}");
        }
    }

    #[test]
    fn test_toggle_is_own_inverse() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }
}
