//! The per-tick state transition
use super::state::{spawn_food, GameState};
use crate::consts;
use rand::Rng;
use std::fmt;

/// What happened during a call to [`step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// The snake moved without eating
    Moved,

    /// The snake moved onto the food and grew
    Fed {
        /// Did this feeding set a new high score?
        new_high: bool,
        /// There was nowhere left to put the next piece of food, so the game
        /// is over.
        board_full: bool,
    },

    /// The snake would have crashed; the game is over and the snake was
    /// left where it was.
    Collided(Collision),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Body,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "wall"),
            Collision::Body => write!(f, "body"),
        }
    }
}

/// Advance a running game by one tick.
///
/// The head's next position is worked out from `state.heading` and checked
/// for collisions before anything is moved, so a fatal move ends the game on
/// the tick it is attempted.  Reversing onto the neck is not special-cased;
/// it is an ordinary body collision.
///
/// Does nothing and returns `None` if the game is not running.
pub(crate) fn step<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> Option<StepOutcome> {
    if !state.status.running() {
        return None;
    }
    let next = state.heading.advance(state.snake.head());
    if !consts::GRID.contains(next) {
        state.status.finish();
        return Some(StepOutcome::Collided(Collision::Wall));
    }
    if state.snake.body_contains(next) {
        state.status.finish();
        return Some(StepOutcome::Collided(Collision::Body));
    }
    state.snake.push_head(next);
    if next == state.food {
        let new_high = state.scores.record_feed();
        let board_full = match spawn_food(&state.snake, rng) {
            Some(food) => {
                state.food = food;
                false
            }
            None => {
                state.status.finish();
                true
            }
        };
        Some(StepOutcome::Fed {
            new_high,
            board_full,
        })
    } else {
        state.snake.pop_tail();
        Some(StepOutcome::Moved)
    }
}
