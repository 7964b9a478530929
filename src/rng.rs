//! Small deterministic pseudo-random source for the random effects
//!
//! Linear congruential generator with the Numerical Recipes constants.
//! Only the upper 16 bits of the state are handed out, the low bits of
//! an LCG cycle too quickly to be useful.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next 16 random bits
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u16(&mut self) -> u16 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state >> 16) as u16
    }

    /// Uniform value in `0..limit`, or 0 when `limit` is 0
    pub fn below(&mut self, limit: u16) -> u16 {
        if limit == 0 {
            return 0;
        }
        self.next_u16() % limit
    }

    /// Uniform value in `min..=max`
    pub fn between(&mut self, min: u8, max: u8) -> u8 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let span = u16::from(high - low) + 1;
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.below(span) as u8;
        low + offset
    }
}
