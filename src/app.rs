use crate::clock::TickClock;
use crate::consts;
use crate::game::Game;
use crate::store::KeyValueStore;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The frame loop.  Owns the game for as long as it runs.
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng, S = Box<dyn KeyValueStore>> {
    game: Game<R, S>,
    clock: TickClock,
    quitting: bool,
}

impl<R: Rng, S: KeyValueStore> App<R, S> {
    pub(crate) fn new(game: Game<R, S>) -> App<R, S> {
        App {
            game,
            clock: TickClock::new(consts::TICK_PERIOD, Instant::now()),
            quitting: false,
        }
    }

    /// Run frames until the user quits.  Each frame advances the simulation
    /// if a tick is due, redraws the screen, and then handles input until the
    /// next frame is due.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let start = Instant::now();
        self.clock.restart(start);
        let mut next_frame = start;
        tracing::debug!(
            tick = ?consts::TICK_PERIOD,
            frame = ?consts::FRAME_PERIOD,
            "Starting frame loop"
        );
        while !self.quitting {
            let now = Instant::now();
            self.frame(now);
            terminal.draw(|frame| self.game.draw(frame))?;
            next_frame = next_frame_after(next_frame, now);
            self.process_input(next_frame)?;
        }
        tracing::debug!(status = %self.game.status(), "Frame loop stopped");
        Ok(())
    }

    /// Advance the game by one step if a tick is due at `now`.  Returns
    /// `true` if the game stepped.
    fn frame(&mut self, now: Instant) -> bool {
        self.clock.tick_due(now) && self.game.tick().is_some()
    }

    /// Handle input events until `deadline`
    fn process_input(&mut self, deadline: Instant) -> io::Result<()> {
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait)? {
                return Ok(());
            }
            if self.game.handle_event(read()?).is_break() {
                self.quitting = true;
                return Ok(());
            }
        }
    }
}

/// Return the deadline for the frame after one scheduled at `prev`.  If that
/// has already passed at `now`, the schedule is restarted from `now` instead
/// of trying to catch up.
fn next_frame_after(prev: Instant, now: Instant) -> Instant {
    let next = prev + consts::FRAME_PERIOD;
    if next <= now {
        now + consts::FRAME_PERIOD
    } else {
        next
    }
}
