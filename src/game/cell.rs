use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// A grid coordinate.  Coordinates are signed so that a head projected past
/// the top or left wall can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i16,
    pub(crate) y: i16,
}

impl Cell {
    pub(crate) const fn new(x: i16, y: i16) -> Cell {
        Cell { x, y }
    }

    /// Return the cell offset from this one by `(dx, dy)`
    pub(crate) fn offset(self, (dx, dy): (i16, i16)) -> Cell {
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// The rectangular playing field, anchored at `(0, 0)`
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    pub(crate) width: i16,
    pub(crate) height: i16,
}

impl Grid {
    pub(crate) const fn new(width: i16, height: i16) -> Grid {
        Grid { width, height }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Choose a cell uniformly at random from those not in `occupied`.
    /// Returns `None` if every cell is occupied.
    pub(crate) fn random_free_cell<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        occupied: &HashSet<Cell>,
    ) -> Option<Cell> {
        self.cells()
            .filter(|c| !occupied.contains(c))
            .choose(rng)
    }
}
