//! Blink effect
//!
//! Full white for `delay`, then off for half of `delay`.

use embassy_time::Duration;

use super::{Effect, Frame};
use crate::{
    color::{OFF, WHITE},
    rng::Rng,
};

#[derive(Debug, Clone)]
pub struct BlinkEffect {
    delay: Duration,
    lit: bool,
}

impl BlinkEffect {
    pub const fn new(delay: Duration) -> Self {
        Self { delay, lit: false }
    }
}

impl Effect for BlinkEffect {
    fn step(&mut self, _rng: &mut Rng) -> Frame {
        self.lit = !self.lit;
        if self.lit {
            Frame::new(WHITE, self.delay)
        } else {
            Frame::new(OFF, self.delay / 2)
        }
    }

    fn reset(&mut self) {
        self.lit = false;
    }
}
