//! Static color effect
//!
//! Shows one fixed color for as long as the signal stays on.

use embassy_time::Duration;

use super::{Effect, Frame};
use crate::{color::Rgb, rng::Rng};

/// Static color effect - holds a single color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgb,
    /// How often the signal is re-checked while the color is held
    poll_interval: Duration,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgb, poll_interval: Duration) -> Self {
        Self {
            color,
            poll_interval,
        }
    }
}

impl Effect for StaticColorEffect {
    fn step(&mut self, _rng: &mut Rng) -> Frame {
        Frame::new(self.color, self.poll_interval)
    }
}
