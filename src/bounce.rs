//! Reflect-at-boundary ramp shared by the fade effects
//!
//! The value climbs by `step` until it reaches 255, then falls by `step`
//! until it reaches 0, and so on. Crossing a boundary clamps the value
//! to that boundary, so an uneven step never produces an out-of-range
//! intensity.

/// Bouncing 8-bit ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    value: u8,
    step: u8,
    rising: bool,
}

impl Bounce {
    /// Create a ramp starting at 0 and rising.
    ///
    /// A zero step is treated as 1.
    pub const fn new(step: u8) -> Self {
        Self {
            value: 0,
            step: if step == 0 { 1 } else { step },
            rising: true,
        }
    }

    /// Current intensity
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Step size
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Whether the next advance moves up
    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    /// Move one step, reversing direction at either boundary.
    ///
    /// Returns `true` when a falling ramp lands back on 0, i.e. one full
    /// up-down ramp has completed.
    pub fn advance(&mut self) -> bool {
        if self.rising {
            self.value = self.value.saturating_add(self.step);
            if self.value == u8::MAX {
                self.rising = false;
            }
            return false;
        }

        self.value = self.value.saturating_sub(self.step);
        if self.value == 0 {
            self.rising = true;
            return true;
        }
        false
    }

    /// Return to 0, rising
    pub fn reset(&mut self) {
        self.value = 0;
        self.rising = true;
    }
}
