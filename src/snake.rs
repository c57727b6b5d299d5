use std::collections::VecDeque;

use crate::grid::{Cell, GridSize};

/// Number of segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Ordered snake body, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates the starting snake: head at the board centre, body trailing to
    /// the left. On the 20x20 board this is `(10,10), (9,10), (8,10)`.
    #[must_use]
    pub fn initial(grid: GridSize) -> Self {
        let head = Cell::new(i32::from(grid.width() / 2), i32::from(grid.height() / 2));
        let body = (0..INITIAL_SNAKE_LENGTH)
            .map(|offset| Cell::new(head.x - offset as i32, head.y))
            .collect();

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Iterates the body without its last segment.
    pub fn body_without_tail(&self) -> impl Iterator<Item = &Cell> {
        self.body.range(..self.body.len().saturating_sub(1))
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};

    use super::Snake;

    #[test]
    fn initial_snake_sits_at_board_centre() {
        let snake = Snake::initial(GridSize::DEFAULT);
        let segments: Vec<Cell> = snake.segments().copied().collect();

        assert_eq!(
            segments,
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
        assert_eq!(snake.head(), Cell::new(10, 10));
        assert_eq!(snake.tail(), Cell::new(8, 10));
    }

    #[test]
    fn body_without_tail_skips_last_segment() {
        let snake = Snake::from_segments(vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)]);
        let body: Vec<Cell> = snake.body_without_tail().copied().collect();

        assert_eq!(body, vec![Cell::new(2, 2), Cell::new(1, 2)]);
    }

    #[test]
    fn single_segment_has_empty_collision_body() {
        let snake = Snake::from_segments(vec![Cell::new(4, 4)]);

        assert_eq!(snake.body_without_tail().count(), 0);
        assert_eq!(snake.head(), snake.tail());
    }

    #[test]
    fn push_and_pop_keep_order() {
        let mut snake = Snake::from_segments(vec![Cell::new(1, 1), Cell::new(0, 1)]);

        snake.push_head(Cell::new(2, 1));
        snake.pop_tail();

        assert_eq!(snake.head(), Cell::new(2, 1));
        assert_eq!(snake.tail(), Cell::new(1, 1));
        assert_eq!(snake.len(), 2);
        assert!(!snake.occupies(Cell::new(0, 1)));
    }
}
