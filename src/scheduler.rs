//! Program rotation and idle detection
//!
//! The scheduler is pure: every call takes `now`, so rotation and idle
//! behaviour can be exercised with virtual time. The [`Controller`]
//! turns its decisions into effect runs and waits.
//!
//! [`Controller`]: crate::Controller

use embassy_time::{Duration, Instant};

use crate::effect::EffectSlot;
use crate::monitor::SignalMonitor;

/// Extra time past the idle threshold before re-checking, so a wake-up at
/// the deadline sees the threshold strictly exceeded.
const IDLE_MARGIN: Duration = Duration::from_millis(1);

/// Ordered, wrapping list of programs
#[derive(Debug, Clone)]
pub struct Rotation<'a> {
    programs: &'a [EffectSlot],
    index: usize,
}

impl<'a> Rotation<'a> {
    pub const fn new(programs: &'a [EffectSlot]) -> Self {
        Self { programs, index: 0 }
    }

    /// Index of the program that runs next
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Fresh copy of the program that runs next
    pub fn current(&self) -> Option<EffectSlot> {
        let mut effect = self.programs.get(self.index)?.clone();
        effect.reset();
        Some(effect)
    }

    /// Move to the next program, wrapping after the last one
    pub fn advance(&mut self) {
        self.index += 1;
        if self.index >= self.programs.len() {
            self.index = 0;
        }
    }

    /// Go back to the first program
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Coarse scheduler state, for observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Running or about to run a program
    Active,
    /// Signal off, idle threshold not reached yet
    Waiting,
    /// Signal off past the threshold, rotation reset
    Idle,
}

/// What the control loop should do next
#[derive(Debug, Clone)]
pub enum Decision {
    /// Run `effect` until the signal drops
    Run { index: usize, effect: EffectSlot },
    /// Signal is off but the threshold is not reached; check again at
    /// `until` or when the signal returns
    Hold { until: Instant },
    /// Park until the signal returns
    Idle,
}

pub struct ProgramScheduler<'a> {
    rotation: Rotation<'a>,
    idle_threshold: Duration,
    state: SchedulerState,
}

impl<'a> ProgramScheduler<'a> {
    pub const fn new(programs: &'a [EffectSlot], idle_threshold: Duration) -> Self {
        Self {
            rotation: Rotation::new(programs),
            idle_threshold,
            state: SchedulerState::Waiting,
        }
    }

    /// Decide the next step of the outer loop.
    ///
    /// Samples the signal through `monitor`, which records transitions.
    /// An empty rotation never produces [`Decision::Run`].
    pub fn poll(&mut self, monitor: &mut SignalMonitor<'_>, now: Instant) -> Decision {
        if monitor.is_on(now) {
            if let Some(effect) = self.rotation.current() {
                self.state = SchedulerState::Active;
                return Decision::Run {
                    index: self.rotation.index(),
                    effect,
                };
            }
        }

        if monitor.time_since_off(now) > self.idle_threshold {
            self.rotation.reset();
            self.state = SchedulerState::Idle;
            return Decision::Idle;
        }

        self.state = SchedulerState::Waiting;
        Decision::Hold {
            until: monitor.last_off() + self.idle_threshold + IDLE_MARGIN,
        }
    }

    /// Mark the running program as finished and move to the next one.
    pub fn complete(&mut self) {
        self.rotation.advance();
    }

    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    pub const fn rotation(&self) -> &Rotation<'a> {
        &self.rotation
    }
}
