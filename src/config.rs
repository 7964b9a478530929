//! Compile-time tunables and the controller configuration
//!
//! Everything the controller needs is fixed at build time. The
//! [`ControllerConfig`] struct only bundles these constants so tests and
//! boards can pass their own rotation or thresholds.

use core::fmt;

use embassy_time::Duration;

use crate::color::Rgb;
use crate::effect::{
    BlinkEffect, EffectSlot, RandomJumpEffect, RandomWalkEffect, SequentialFadeEffect,
    SequentialFlashEffect, StaticColorEffect, SynchronizedFadeEffect,
};

/// Continuous off time after which the rotation restarts
pub const IDLE_THRESHOLD: Duration = Duration::from_millis(10_000);

/// Re-check interval while a static color is shown
pub const STATIC_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Color of the first program in the rotation
pub const STATIC_COLOR: Rgb = Rgb {
    r: 25,
    g: 255,
    b: 25,
};

/// Brightness change per fade frame
pub const FADE_AMOUNT: u8 = 5;
pub const FADE_DELAY: Duration = Duration::from_millis(10);
pub const FLASH_DELAY: Duration = Duration::from_millis(500);
pub const BLINK_DELAY: Duration = Duration::from_millis(500);
pub const JUMP_DELAY: Duration = Duration::from_millis(500);
pub const WALK_DELAY: Duration = Duration::from_millis(250);

/// Seed for the random effects
pub const DEFAULT_SEED: u32 = 0x9e37_79b9;

/// Programs in the order the remote steps through them
pub const DEFAULT_ROTATION: [EffectSlot; 7] = [
    EffectSlot::Static(StaticColorEffect::new(STATIC_COLOR, STATIC_POLL_INTERVAL)),
    EffectSlot::SequentialFade(SequentialFadeEffect::new(FADE_AMOUNT, FADE_DELAY)),
    EffectSlot::SynchronizedFade(SynchronizedFadeEffect::new(FADE_AMOUNT, FADE_DELAY)),
    EffectSlot::SequentialFlash(SequentialFlashEffect::new(FLASH_DELAY)),
    EffectSlot::Blink(BlinkEffect::new(BLINK_DELAY)),
    EffectSlot::RandomJump(RandomJumpEffect::new(JUMP_DELAY)),
    EffectSlot::RandomWalk(RandomWalkEffect::new(WALK_DELAY)),
];

/// Configuration for the controller
#[derive(Debug, Clone)]
pub struct ControllerConfig<'a> {
    /// Programs to rotate through, in order
    pub rotation: &'a [EffectSlot],
    /// Off time after which the controller goes idle
    pub idle_threshold: Duration,
    /// Seed for the random effects
    pub seed: u32,
}

impl ControllerConfig<'static> {
    pub const DEFAULT: Self = Self {
        rotation: &DEFAULT_ROTATION,
        idle_threshold: IDLE_THRESHOLD,
        seed: DEFAULT_SEED,
    };
}

impl Default for ControllerConfig<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ControllerConfig<'_> {
    /// Check that the configuration can drive a controller
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation.is_empty() {
            return Err(ConfigError::EmptyRotation);
        }
        if self.idle_threshold == Duration::from_ticks(0) {
            return Err(ConfigError::ZeroIdleThreshold);
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No programs in the rotation
    EmptyRotation,
    /// Idle threshold of zero
    ZeroIdleThreshold,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRotation => write!(f, "rotation must contain at least one program"),
            Self::ZeroIdleThreshold => write!(f, "idle threshold must be non-zero"),
        }
    }
}
