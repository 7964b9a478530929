//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait: a pure step machine that
//! hands out one frame at a time together with how long to hold it.
//! Timing and signal handling live in the controller, so effects can be
//! driven frame by frame without a clock.

mod blink;
mod random_jump;
mod random_walk;
mod sequential_fade;
mod sequential_flash;
mod static_color;
mod synchronized_fade;

use embassy_time::Duration;
pub use blink::BlinkEffect;
pub use random_jump::RandomJumpEffect;
pub use random_walk::RandomWalkEffect;
pub use sequential_fade::SequentialFadeEffect;
pub use sequential_flash::SequentialFlashEffect;
pub use static_color::StaticColorEffect;
pub use synchronized_fade::SynchronizedFadeEffect;

use crate::{color::Rgb, rng::Rng};

/// Lowest intensity drawn by the random effects
pub const RANDOM_MIN: u8 = 1;
/// Highest intensity drawn by the random effects
pub const RANDOM_MAX: u8 = 255;

const EFFECT_NAME_STATIC: &str = "static";
const EFFECT_NAME_SEQUENTIAL_FADE: &str = "sequential_fade";
const EFFECT_NAME_SYNCHRONIZED_FADE: &str = "synchronized_fade";
const EFFECT_NAME_SEQUENTIAL_FLASH: &str = "sequential_flash";
const EFFECT_NAME_BLINK: &str = "blink";
const EFFECT_NAME_RANDOM_JUMP: &str = "random_jump";
const EFFECT_NAME_RANDOM_WALK: &str = "random_walk";

/// One output frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Color to show
    pub color: Rgb,
    /// How long to show it before asking for the next frame
    pub hold: Duration,
}

impl Frame {
    pub const fn new(color: Rgb, hold: Duration) -> Self {
        Self { color, hold }
    }
}

pub trait Effect {
    /// Produce the next frame
    fn step(&mut self, rng: &mut Rng) -> Frame;

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Fixed color
    Static(StaticColorEffect),
    /// One channel at a time ramps up and down
    SequentialFade(SequentialFadeEffect),
    /// All channels ramp together
    SynchronizedFade(SynchronizedFadeEffect),
    /// One channel at a time flashes at full intensity
    SequentialFlash(SequentialFlashEffect),
    /// White on, then off for half as long
    Blink(BlinkEffect),
    /// Full random repaint every frame
    RandomJump(RandomJumpEffect),
    /// One random channel changes every frame
    RandomWalk(RandomWalkEffect),
}

/// Known effect ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    Static,
    SequentialFade,
    SynchronizedFade,
    SequentialFlash,
    Blink,
    RandomJump,
    RandomWalk,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => EFFECT_NAME_STATIC,
            Self::SequentialFade => EFFECT_NAME_SEQUENTIAL_FADE,
            Self::SynchronizedFade => EFFECT_NAME_SYNCHRONIZED_FADE,
            Self::SequentialFlash => EFFECT_NAME_SEQUENTIAL_FLASH,
            Self::Blink => EFFECT_NAME_BLINK,
            Self::RandomJump => EFFECT_NAME_RANDOM_JUMP,
            Self::RandomWalk => EFFECT_NAME_RANDOM_WALK,
        }
    }

}

impl EffectSlot {
    /// Produce the next frame of the current effect
    pub fn step(&mut self, rng: &mut Rng) -> Frame {
        match self {
            Self::Static(effect) => effect.step(rng),
            Self::SequentialFade(effect) => effect.step(rng),
            Self::SynchronizedFade(effect) => effect.step(rng),
            Self::SequentialFlash(effect) => effect.step(rng),
            Self::Blink(effect) => effect.step(rng),
            Self::RandomJump(effect) => effect.step(rng),
            Self::RandomWalk(effect) => effect.step(rng),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Static(effect) => Effect::reset(effect),
            Self::SequentialFade(effect) => Effect::reset(effect),
            Self::SynchronizedFade(effect) => Effect::reset(effect),
            Self::SequentialFlash(effect) => Effect::reset(effect),
            Self::Blink(effect) => Effect::reset(effect),
            Self::RandomJump(effect) => Effect::reset(effect),
            Self::RandomWalk(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Static(_) => EffectId::Static,
            Self::SequentialFade(_) => EffectId::SequentialFade,
            Self::SynchronizedFade(_) => EffectId::SynchronizedFade,
            Self::SequentialFlash(_) => EffectId::SequentialFlash,
            Self::Blink(_) => EffectId::Blink,
            Self::RandomJump(_) => EffectId::RandomJump,
            Self::RandomWalk(_) => EffectId::RandomWalk,
        }
    }
}
