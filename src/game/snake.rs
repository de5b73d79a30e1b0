use super::cell::Cell;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored head first; there is always at least one cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    cells: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake in its starting position, [`consts::INITIAL_SNAKE`]
    pub(crate) fn new() -> Snake {
        Snake {
            cells: VecDeque::from(consts::INITIAL_SNAKE),
        }
    }

    /// Create a snake from an explicit list of cells, head first.  Returns
    /// `None` if `cells` is empty.
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Snake> {
        let cells = cells.into_iter().collect::<VecDeque<_>>();
        (!cells.is_empty()).then_some(Snake { cells })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.cells.front().copied().unwrap_or(consts::INITIAL_SNAKE[0])
    }

    /// Iterate over the snake's cells other than the head, from the neck to
    /// the tail
    pub(crate) fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(1).copied()
    }

    /// Iterate over all of the snake's cells, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Does any cell other than the head lie on `cell`?
    pub(crate) fn body_contains(&self, cell: Cell) -> bool {
        self.body().any(|c| c == cell)
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Make `cell` the new head.  The old head becomes part of the body.
    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    /// Remove the last cell of the tail.  A snake of length one is left
    /// alone.
    pub(crate) fn pop_tail(&mut self) {
        if self.cells.len() > 1 {
            let _ = self.cells.pop_back();
        }
    }
}
