//! Random color walk effect
//!
//! Starts from a random color, then each frame re-rolls exactly one
//! randomly chosen channel. The color drifts instead of jumping.

use embassy_time::Duration;

use super::{Effect, Frame, RANDOM_MAX, RANDOM_MIN};
use crate::{
    color::{ColorChannel, Rgb},
    rng::Rng,
};

#[derive(Debug, Clone)]
pub struct RandomWalkEffect {
    delay: Duration,
    /// Color shown by the previous frame, `None` until the first frame
    current: Option<Rgb>,
}

impl RandomWalkEffect {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            current: None,
        }
    }
}

impl Effect for RandomWalkEffect {
    fn step(&mut self, rng: &mut Rng) -> Frame {
        let color = match self.current {
            None => Rgb::new(
                rng.between(RANDOM_MIN, RANDOM_MAX),
                rng.between(RANDOM_MIN, RANDOM_MAX),
                rng.between(RANDOM_MIN, RANDOM_MAX),
            ),
            Some(mut color) => {
                let channel = ColorChannel::from_index(usize::from(rng.below(3)));
                channel.set(&mut color, rng.between(RANDOM_MIN, RANDOM_MAX));
                color
            }
        };
        self.current = Some(color);

        Frame::new(color, self.delay)
    }

    fn reset(&mut self) {
        self.current = None;
    }
}
