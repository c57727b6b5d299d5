use crate::config::{ConfigError, DEFAULT_GRID_SIZE, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Coordinates are signed so a head stepped past the edge can be represented
/// and rejected by [`is_out_of_bounds`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

/// Validated board dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    width: u16,
    height: u16,
}

impl GridSize {
    /// The classic 20x20 board.
    pub const DEFAULT: Self = Self {
        width: DEFAULT_GRID_SIZE,
        height: DEFAULT_GRID_SIZE,
    };

    /// Creates a grid, rejecting dimensions outside the supported range.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        for value in [width, height] {
            if !(MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).contains(&value) {
                return Err(ConfigError::GridSizeOutOfRange {
                    value,
                    min: MIN_GRID_DIMENSION,
                    max: MAX_GRID_DIMENSION,
                });
            }
        }

        Ok(Self { width, height })
    }

    /// Creates an `n` by `n` grid.
    pub fn square(n: u16) -> Result<Self, ConfigError> {
        Self::new(n, n)
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns true when `cell` lies outside the board.
#[must_use]
pub fn is_out_of_bounds(cell: Cell, grid: GridSize) -> bool {
    cell.x < 0 || cell.y < 0 || cell.x >= i32::from(grid.width) || cell.y >= i32::from(grid.height)
}

/// Returns true when `cell` matches any segment of `body_excluding_tail`.
///
/// Callers pass the body without its last segment: the tail vacates its cell
/// on the same tick the head moves, so stepping onto it is legal.
#[must_use]
pub fn is_self_collision<'a, I>(cell: Cell, body_excluding_tail: I) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    body_excluding_tail
        .into_iter()
        .any(|segment| *segment == cell)
}
