use super::cell::Cell;
use super::direction::Direction;
use super::score::Scoreboard;
use super::snake::Snake;
use super::status::Status;
use crate::consts;
use rand::Rng;
use std::collections::HashSet;

/// Everything the simulation step reads and writes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,
    pub(crate) food: Cell,
    /// The direction the snake will move in on the next tick
    pub(crate) heading: Direction,
    pub(crate) status: Status,
    pub(crate) scores: Scoreboard,
}

impl GameState {
    /// Create an idle game with the snake in its starting position and the
    /// food placed at random
    pub(crate) fn new<R: Rng + ?Sized>(scores: Scoreboard, rng: &mut R) -> GameState {
        let snake = Snake::new();
        let food = spawn_food(&snake, rng).unwrap_or(consts::INITIAL_SNAKE[0]);
        GameState {
            snake,
            food,
            heading: Direction::default(),
            status: Status::Idle,
            scores,
        }
    }

    /// Return to the idle status with a fresh snake and a zero score.  The
    /// high score is kept, and so is the food unless the new snake lies on
    /// it.
    pub(crate) fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = Snake::new();
        self.heading = Direction::default();
        self.status = Status::Idle;
        self.scores.reset();
        if self.snake.contains(self.food) {
            if let Some(food) = spawn_food(&self.snake, rng) {
                self.food = food;
            }
        }
    }
}

/// Choose a random cell of [`consts::GRID`] not occupied by `snake`
pub(crate) fn spawn_food<R: Rng + ?Sized>(snake: &Snake, rng: &mut R) -> Option<Cell> {
    let occupied = snake.cells().collect::<HashSet<_>>();
    consts::GRID.random_free_cell(rng, &occupied)
}
