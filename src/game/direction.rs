use super::cell::Cell;
use crate::consts;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The unit vector for this direction, with `y` increasing downwards
    pub(crate) fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Return the cell one step from `cell` in this direction.  The result
    /// may lie outside the grid.
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        cell.offset(self.delta())
    }

    /// Return the glyph to use for drawing a snake's head moving in this
    /// direction
    pub(crate) fn head_symbol(self) -> char {
        match self {
            Direction::Up => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_WEST_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_EAST_SYMBOL,
        }
    }
}
