//! Transition bookkeeping on top of a [`SignalLine`]
//!
//! The monitor remembers when the signal last turned on and last turned
//! off. Timestamps move only when [`SignalMonitor::is_on`] observes a
//! level different from the one it saw before, so repeated calls during
//! a steady on or off period leave them untouched.
//!
//! Must be driven from a single context; the interrupt handler only
//! touches the line itself.

use embassy_time::{Duration, Instant};

use crate::signal::SignalLine;

/// Direction of an observed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Off to on
    On,
    /// On to off
    Off,
}

pub struct SignalMonitor<'a> {
    line: &'a SignalLine,
    last_level: bool,
    last_on: Instant,
    last_off: Instant,
    last_transition: Option<Transition>,
}

impl<'a> SignalMonitor<'a> {
    /// Start monitoring at `now`.
    ///
    /// Both timestamps begin at `now` and the previous level is taken as
    /// off, so a line that is already asserted registers an on
    /// transition on the first [`is_on`](Self::is_on) call.
    pub const fn new(line: &'a SignalLine, now: Instant) -> Self {
        Self {
            line,
            last_level: false,
            last_on: now,
            last_off: now,
            last_transition: None,
        }
    }

    /// Sample the line, recording a transition if the level changed.
    pub fn is_on(&mut self, now: Instant) -> bool {
        let level = self.line.level();
        if level != self.last_level {
            self.last_level = level;
            if level {
                self.last_on = now;
                self.last_transition = Some(Transition::On);
            } else {
                self.last_off = now;
                self.last_transition = Some(Transition::Off);
            }
        }
        level
    }

    /// Time elapsed since the last recorded on transition
    pub fn time_since_on(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_on)
    }

    /// Time elapsed since the last recorded off transition
    pub fn time_since_off(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_off)
    }

    /// Instant of the last recorded on transition
    pub const fn last_on(&self) -> Instant {
        self.last_on
    }

    /// Instant of the last recorded off transition
    pub const fn last_off(&self) -> Instant {
        self.last_off
    }

    /// Most recent transition, if any was observed
    pub const fn last_transition(&self) -> Option<Transition> {
        self.last_transition
    }
}
