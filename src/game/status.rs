use std::fmt;

/// Where a game is in its lifecycle.
///
/// ```text
/// Idle ──start──▶ Running ──pause──▶ Paused
///  ▲                │   ◀──resume──
///  │              crash
///  │                ▼
///  └────reset───── Over
/// ```
///
/// Reset returns to `Idle` from any status.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Status {
    /// Waiting for the first key press
    #[default]
    Idle,
    Running,
    Paused,
    /// The snake crashed.  Only a reset leaves this state.
    Over,
}

impl Status {
    /// `Idle` → `Running`.  Returns `true` if the status changed.
    pub(crate) fn start(&mut self) -> bool {
        self.transition(Status::Idle, Status::Running)
    }

    /// `Running` → `Paused`.  Returns `true` if the status changed.
    pub(crate) fn pause(&mut self) -> bool {
        self.transition(Status::Running, Status::Paused)
    }

    /// `Paused` → `Running`.  Returns `true` if the status changed.
    pub(crate) fn resume(&mut self) -> bool {
        self.transition(Status::Paused, Status::Running)
    }

    /// `Running` → `Over`.  Returns `true` if the status changed.
    pub(crate) fn finish(&mut self) -> bool {
        self.transition(Status::Running, Status::Over)
    }

    fn transition(&mut self, from: Status, to: Status) -> bool {
        if *self == from {
            *self = to;
            true
        } else {
            false
        }
    }

    pub(crate) fn running(self) -> bool {
        self == Status::Running
    }

    /// Are directional commands accepted in this status?
    pub(crate) fn steerable(self) -> bool {
        matches!(self, Status::Idle | Status::Running)
    }

    pub(crate) fn can_pause(self) -> bool {
        self == Status::Running
    }

    /// Can the game be resumed (or, when idle, started)?
    pub(crate) fn can_resume(self) -> bool {
        matches!(self, Status::Idle | Status::Paused)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::Over => "over",
        };
        f.pad(name)
    }
}
