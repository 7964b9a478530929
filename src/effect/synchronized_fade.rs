//! Synchronized fade effect
//!
//! All three channels share one bouncing brightness, so the output
//! breathes white from off to full and back without pause.

use embassy_time::Duration;

use super::{Effect, Frame};
use crate::{bounce::Bounce, color::Rgb, rng::Rng};

#[derive(Debug, Clone)]
pub struct SynchronizedFadeEffect {
    brightness: Bounce,
    delay: Duration,
}

impl SynchronizedFadeEffect {
    pub const fn new(fade_amount: u8, delay: Duration) -> Self {
        Self {
            brightness: Bounce::new(fade_amount),
            delay,
        }
    }
}

impl Effect for SynchronizedFadeEffect {
    fn step(&mut self, _rng: &mut Rng) -> Frame {
        let value = self.brightness.value();
        self.brightness.advance();
        Frame::new(Rgb::new(value, value, value), self.delay)
    }

    fn reset(&mut self) {
        self.brightness.reset();
    }
}
