//! Random color jump effect
//!
//! Every frame repaints all three channels with fresh random
//! intensities. Intensities start at 1 so no frame is fully dark.

use embassy_time::Duration;

use super::{Effect, Frame, RANDOM_MAX, RANDOM_MIN};
use crate::{color::Rgb, rng::Rng};

#[derive(Debug, Clone)]
pub struct RandomJumpEffect {
    delay: Duration,
}

impl RandomJumpEffect {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Effect for RandomJumpEffect {
    fn step(&mut self, rng: &mut Rng) -> Frame {
        let color = Rgb::new(
            rng.between(RANDOM_MIN, RANDOM_MAX),
            rng.between(RANDOM_MIN, RANDOM_MAX),
            rng.between(RANDOM_MIN, RANDOM_MAX),
        );
        Frame::new(color, self.delay)
    }
}
