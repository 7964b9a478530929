#![no_std]

pub mod bounce;
pub mod color;
pub mod config;
pub mod controller;
pub mod effect;
mod logging;
pub mod monitor;
pub mod rng;
pub mod scheduler;
pub mod signal;
pub mod wait;

pub use config::{ConfigError, ControllerConfig};
pub use controller::Controller;
pub use effect::{Effect, EffectId, EffectSlot, Frame};
pub use monitor::{SignalMonitor, Transition};
pub use scheduler::{Decision, ProgramScheduler, Rotation, SchedulerState};
pub use signal::SignalLine;
pub use wait::{WaitOutcome, interruptible_wait};

pub use color::{ColorChannel, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract output driver trait
///
/// Implement this trait for the board's three PWM channels.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Set one channel's intensity
    fn set_channel(&mut self, channel: ColorChannel, value: u8);

    /// Set all three channels
    fn write(&mut self, color: Rgb) {
        for channel in ColorChannel::ALL {
            self.set_channel(channel, channel.get(color));
        }
    }
}
