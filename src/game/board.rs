use super::cell::Cell;
use super::direction::Direction;
use super::snake::Snake;
use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect, Size},
    style::Style,
    widgets::{Block, Widget},
};

/// A widget drawing the bordered playing field with the snake and the food
/// on it.  `area` must be at least the size returned by [`Board::size()`];
/// anything outside it is clipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board<'a> {
    pub(crate) snake: &'a Snake,
    pub(crate) food: Cell,
    pub(crate) heading: Direction,
    /// Draw the head as a collision
    pub(crate) crashed: bool,
}

impl Board<'_> {
    /// The size of the board including its border
    pub(crate) fn size() -> Size {
        let width = u16::try_from(consts::GRID.width).unwrap_or_default();
        let height = u16::try_from(consts::GRID.height).unwrap_or_default();
        Size {
            width: width.saturating_add(2),
            height: height.saturating_add(2),
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered().render(area, buf);
        let mut canvas = Canvas {
            area: area.inner(Margin::new(1, 1)),
            buf,
        };
        for cell in self.snake.body() {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        // Draw the head last so that it's always visible
        if self.crashed {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(
                self.snake.head(),
                self.heading.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }
    }
}

/// A view of a `Buffer` addressed in grid cells relative to `area`
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let (Ok(dx), Ok(dy)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = self.area.x.checked_add(dx) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(dy) else {
            return;
        };
        let pos = Position { x, y };
        if !self.area.contains(pos) {
            return;
        }
        if let Some(bufcell) = self.buf.cell_mut(pos) {
            bufcell.set_char(symbol);
            bufcell.set_style(Style::reset().patch(style));
        }
    }
}
