use embassy_time::Duration;

use super::{Effect, Frame};
use crate::{color::ColorChannel, rng::Rng};

/// Flashes red, green and blue at full intensity one after another
#[derive(Debug, Clone)]
pub struct SequentialFlashEffect {
    channel: ColorChannel,
    delay: Duration,
}

impl SequentialFlashEffect {
    pub const fn new(delay: Duration) -> Self {
        Self {
            channel: ColorChannel::Red,
            delay,
        }
    }
}

impl Effect for SequentialFlashEffect {
    fn step(&mut self, _rng: &mut Rng) -> Frame {
        let color = self.channel.solo(u8::MAX);
        self.channel = self.channel.next();
        Frame::new(color, self.delay)
    }

    fn reset(&mut self) {
        self.channel = ColorChannel::Red;
    }
}
