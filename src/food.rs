use rand::Rng;
use tracing::debug;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Random draws attempted before falling back to a linear scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1024;

/// Picks a cell not occupied by `snake`.
///
/// Draws uniformly over the whole grid and rejects occupied cells. After
/// [`MAX_PLACEMENT_ATTEMPTS`] rejections the first free cell in row-major
/// order is used instead, so a nearly full board still terminates. Returns
/// `None` only when every cell is occupied.
pub fn place<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Cell> {
    if snake.len() >= grid.total_cells() {
        return None;
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Cell::new(
            rng.gen_range(0..i32::from(grid.width())),
            rng.gen_range(0..i32::from(grid.height())),
        );
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    debug!(
        snake_len = snake.len(),
        "food sampling exhausted; scanning for a free cell"
    );
    first_free_cell(grid, snake)
}

/// Returns the first unoccupied cell in row-major order.
#[must_use]
pub fn first_free_cell(grid: GridSize, snake: &Snake) -> Option<Cell> {
    grid.cells().find(|cell| !snake.occupies(*cell))
}
