use crate::consts;
use crate::store::{KeyValueStore, SaveError};

/// The current score and the best score seen so far
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scoreboard {
    current: u32,
    best: u32,
}

impl Scoreboard {
    pub(crate) fn new(best: u32) -> Scoreboard {
        Scoreboard { current: 0, best }
    }

    /// Read the high score from `store`.  A missing or non-numeric entry
    /// counts as zero.
    pub(crate) fn load<S: KeyValueStore + ?Sized>(store: &S) -> Scoreboard {
        let best = store
            .get(consts::HIGH_SCORE_KEY)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Scoreboard::new(best)
    }

    /// Write the high score to `store`
    pub(crate) fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), SaveError> {
        store.set(consts::HIGH_SCORE_KEY, self.best.to_string())
    }

    pub(crate) fn score(&self) -> u32 {
        self.current
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.best
    }

    /// Count one feeding.  Returns `true` if this set a new high score.
    pub(crate) fn record_feed(&mut self) -> bool {
        self.current = self.current.saturating_add(1);
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }

    /// Zero the current score, keeping the high score
    pub(crate) fn reset(&mut self) {
        self.current = 0;
    }
}
