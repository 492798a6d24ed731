use std::collections::HashSet;

use crate::games::SessionRng;
use super::grid::Grid;
use super::types::Point;

pub struct FoodPlacer {
    grid: Grid,
    random_attempts: u32,
}

impl FoodPlacer {
    pub fn new(grid: Grid, random_attempts: u32) -> Self {
        Self {
            grid,
            random_attempts,
        }
    }

    /// Picks a cell outside `occupied`: uniform random draws first, then a
    /// row-major scan once the attempts run out. `None` means the board is full.
    pub fn place(&self, occupied: &HashSet<Point>, rng: &mut SessionRng) -> Option<Point> {
        let size = self.grid.size() as i32;

        for _ in 0..self.random_attempts {
            let (x, y) = rng.random_cell(size);
            let pos = Point::new(x, y);
            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }

        self.grid.cells().find(|cell| !occupied.contains(cell))
    }
}
