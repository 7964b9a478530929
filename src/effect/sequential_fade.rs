//! Sequential fade effect
//!
//! Ramps red up to full and back down, then green, then blue, and starts
//! over. Only the channel being ramped is lit.

use embassy_time::Duration;

use super::{Effect, Frame};
use crate::{bounce::Bounce, color::ColorChannel, rng::Rng};

#[derive(Debug, Clone)]
pub struct SequentialFadeEffect {
    channel: ColorChannel,
    brightness: Bounce,
    delay: Duration,
}

impl SequentialFadeEffect {
    /// Create a new sequential fade
    ///
    /// # Arguments
    /// * `fade_amount` - Brightness change per frame
    /// * `delay` - Time each frame is held
    pub const fn new(fade_amount: u8, delay: Duration) -> Self {
        Self {
            channel: ColorChannel::Red,
            brightness: Bounce::new(fade_amount),
            delay,
        }
    }

    /// Channel currently being ramped
    pub const fn channel(&self) -> ColorChannel {
        self.channel
    }
}

impl Effect for SequentialFadeEffect {
    fn step(&mut self, _rng: &mut Rng) -> Frame {
        let color = self.channel.solo(self.brightness.value());

        // A finished up-down ramp hands over to the next channel
        if self.brightness.advance() {
            self.channel = self.channel.next();
        }

        Frame::new(color, self.delay)
    }

    fn reset(&mut self) {
        self.channel = ColorChannel::Red;
        self.brightness.reset();
    }
}
