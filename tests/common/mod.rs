//! Shared test infrastructure

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use myrtio_remote_light::effect::{
    BlinkEffect, EffectSlot, RandomJumpEffect, RandomWalkEffect, SequentialFadeEffect,
    SequentialFlashEffect, StaticColorEffect, SynchronizedFadeEffect,
};
use myrtio_remote_light::{ColorChannel, Duration, OutputDriver, Rgb, SignalLine};

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const STATIC: Rgb = Rgb {
    r: 25,
    g: 255,
    b: 25,
};

/// Reference rotation with delays short enough for host tests
pub const FAST_ROTATION: [EffectSlot; 7] = [
    EffectSlot::Static(StaticColorEffect::new(STATIC, Duration::from_millis(5))),
    EffectSlot::SequentialFade(SequentialFadeEffect::new(5, Duration::from_millis(1))),
    EffectSlot::SynchronizedFade(SynchronizedFadeEffect::new(5, Duration::from_millis(1))),
    EffectSlot::SequentialFlash(SequentialFlashEffect::new(Duration::from_millis(2))),
    EffectSlot::Blink(BlinkEffect::new(Duration::from_millis(2))),
    EffectSlot::RandomJump(RandomJumpEffect::new(Duration::from_millis(2))),
    EffectSlot::RandomWalk(RandomWalkEffect::new(Duration::from_millis(2))),
];

/// When a recording output pulls the signal low
#[derive(Clone, Copy)]
pub enum Cut {
    /// After this many frame writes
    After(usize),
    /// When a frame matching the predicate is written
    When(fn(Rgb) -> bool),
}

/// Output that records every frame and can drop the signal on cue,
/// standing in for the remote being released mid-effect
pub struct RecordingOutput<'a> {
    current: Rgb,
    frames: Vec<Rgb>,
    line: Option<&'a SignalLine>,
    cut: Option<Cut>,
    writes_since_armed: usize,
}

impl<'a> RecordingOutput<'a> {
    pub fn new() -> Self {
        Self {
            current: OFF,
            frames: Vec::new(),
            line: None,
            cut: None,
            writes_since_armed: 0,
        }
    }

    /// Output that drops `line` according to `cut`
    pub fn cutting(line: &'a SignalLine, cut: Cut) -> Self {
        let mut output = Self::new();
        output.line = Some(line);
        output.arm(cut);
        output
    }

    /// Re-arm the signal cut
    pub fn arm(&mut self, cut: Cut) {
        self.cut = Some(cut);
        self.writes_since_armed = 0;
    }

    pub fn current(&self) -> Rgb {
        self.current
    }

    pub fn frames(&self) -> &[Rgb] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<Rgb> {
        self.frames.last().copied()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl OutputDriver for RecordingOutput<'_> {
    fn set_channel(&mut self, channel: ColorChannel, value: u8) {
        channel.set(&mut self.current, value);
    }

    fn write(&mut self, color: Rgb) {
        for channel in ColorChannel::ALL {
            self.set_channel(channel, channel.get(color));
        }
        self.frames.push(color);

        // Turning the output off never counts towards a cut
        if color == OFF && self.writes_since_armed == 0 {
            return;
        }
        self.writes_since_armed += 1;

        let fire = match self.cut {
            Some(Cut::After(count)) => self.writes_since_armed >= count,
            Some(Cut::When(matches)) => matches(color),
            None => false,
        };
        if fire {
            self.cut = None;
            if let Some(line) = self.line {
                line.on_edge(false);
            }
        }
    }
}
