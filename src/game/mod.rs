mod board;
mod cell;
mod controls;
mod direction;
mod mailbox;
mod score;
mod snake;
mod state;
mod status;
mod step;
pub(crate) use self::cell::{Cell, Grid};
use self::board::Board;
use self::controls::ControlBar;
pub(crate) use self::direction::Direction;
use self::mailbox::Mailbox;
pub(crate) use self::score::Scoreboard;
#[cfg(test)]
pub(crate) use self::snake::Snake;
use self::state::GameState;
pub(crate) use self::status::Status;
use self::step::{step, StepOutcome};
use crate::command::Command;
use crate::consts;
use crate::store::KeyValueStore;
use crate::util::{center_rect, get_display_area};
use crossterm::event::Event;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Widget,
    Frame,
};
use std::ops::ControlFlow;

/// A game session: the state the simulation works on, plus the pieces that
/// feed it (input mailbox, RNG) and the store the high score is saved to
#[derive(Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng, S = Box<dyn KeyValueStore>> {
    rng: R,
    state: GameState,
    /// The most recent direction requested since the last tick
    steering: Mailbox<Direction>,
    store: S,
}

impl<S: KeyValueStore> Game<rand::rngs::ThreadRng, S> {
    pub(crate) fn new(store: S) -> Self {
        Game::new_with_rng(store, rand::rng())
    }
}

impl<R: Rng, S: KeyValueStore> Game<R, S> {
    /// Create an idle game, reading the high score from `store`
    pub(crate) fn new_with_rng(store: S, mut rng: R) -> Game<R, S> {
        let scores = Scoreboard::load(&store);
        tracing::debug!(high_score = scores.high_score(), "Loaded high score");
        let state = GameState::new(scores, &mut rng);
        Game {
            rng,
            state,
            steering: Mailbox::new(),
            store,
        }
    }

    /// Run one simulation tick if the game is running.  The most recent
    /// direction command received since the previous tick is applied first.
    pub(crate) fn tick(&mut self) -> Option<StepOutcome> {
        if !self.state.status.running() {
            return None;
        }
        if let Some(d) = self.steering.take() {
            self.state.heading = d;
        }
        let outcome = step(&mut self.state, &mut self.rng)?;
        match outcome {
            StepOutcome::Moved => (),
            StepOutcome::Fed {
                new_high,
                board_full,
            } => {
                tracing::debug!(score = self.state.scores.score(), "Snake ate");
                if new_high {
                    self.save_high_score();
                }
                if board_full {
                    tracing::info!(
                        score = self.state.scores.score(),
                        "Game over: no room left for food"
                    );
                }
            }
            StepOutcome::Collided(collision) => {
                tracing::info!(
                    %collision,
                    score = self.state.scores.score(),
                    high_score = self.state.scores.high_score(),
                    "Game over"
                );
            }
        }
        Some(outcome)
    }

    pub(crate) fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        if event == Event::FocusLost {
            self.pause();
        } else if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            return self.handle_command(cmd);
        }
        ControlFlow::Continue(())
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Quit => return ControlFlow::Break(()),
            Command::Up => self.steer(Direction::Up),
            Command::Down => self.steer(Direction::Down),
            Command::Left => self.steer(Direction::Left),
            Command::Right => self.steer(Direction::Right),
            Command::Pause => {
                if !self.pause() {
                    self.resume();
                }
            }
            Command::Resume => {
                if !self.start() {
                    self.resume();
                }
            }
            Command::Reset => self.reset(),
        }
        ControlFlow::Continue(())
    }

    /// Queue a change of direction for the next tick.  An idle game is
    /// started as well.  Ignored when paused or over.
    fn steer(&mut self, direction: Direction) {
        if self.state.status.steerable() {
            self.steering.put(direction);
            self.start();
        }
    }

    fn start(&mut self) -> bool {
        let started = self.state.status.start();
        if started {
            tracing::info!("Game started");
        }
        started
    }

    fn pause(&mut self) -> bool {
        let paused = self.state.status.pause();
        if paused {
            tracing::info!(score = self.state.scores.score(), "Game paused");
        }
        paused
    }

    fn resume(&mut self) -> bool {
        let resumed = self.state.status.resume();
        if resumed {
            tracing::info!("Game resumed");
        }
        resumed
    }

    /// Return to the idle state with a fresh snake and score, keeping the
    /// high score
    pub(crate) fn reset(&mut self) {
        tracing::info!(from = %self.state.status, "Game reset");
        self.state.reset(&mut self.rng);
        self.steering.clear();
    }

    fn save_high_score(&mut self) {
        let high_score = self.state.scores.high_score();
        tracing::info!(high_score, "New high score");
        if let Err(e) = self.state.scores.save(&mut self.store) {
            tracing::warn!(error = %e, "Could not save high score");
        }
    }
}

impl<R, S> Game<R, S> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn status(&self) -> Status {
        self.state.status
    }
}

impl<R, S> Widget for &Game<R, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg_area, controls_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}   High Score: {}",
                self.state.scores.score(),
                self.state.scores.high_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        Board {
            snake: &self.state.snake,
            food: self.state.food,
            heading: self.state.heading,
            crashed: self.state.status == Status::Over,
        }
        .render(center_rect(board_area, Board::size()), buf);

        let msg = match self.state.status {
            Status::Idle => " Press an arrow key to start",
            Status::Running => "",
            Status::Paused => " Paused; press p or space to resume",
            Status::Over => " Game over; press r to play again",
        };
        Line::from(msg).render(msg_area, buf);
        ControlBar {
            status: self.state.status,
        }
        .render(controls_area, buf);
    }
}

#[cfg(test)]
mod tests;
