//! 31-bit linear congruential sampler driving edge decisions.
//!
//! The generator needs bit-identical output for a given seed on every
//! platform, so it uses this fixed recurrence instead of a `rand` engine
//! whose stream is allowed to change between releases.

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const STATE_MASK: u32 = 0x7fff_ffff;

/// Exclusive upper bound of [`Lcg31::percent`].
pub(crate) const PERCENT_SCALE: u32 = 100;
/// Largest weight produced by [`Lcg31::weight`].
pub(crate) const MAX_WEIGHT: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lcg31 {
    state: u32,
}

impl Lcg31 {
    pub(crate) const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    const fn advance(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & STATE_MASK;
        self.state
    }

    /// Draws a sample in `0..100`.
    pub(crate) const fn percent(&mut self) -> u32 {
        self.advance() % PERCENT_SCALE
    }

    /// Draws a weight in `1..=10`.
    pub(crate) const fn weight(&mut self) -> u32 {
        self.advance() % MAX_WEIGHT + 1
    }
}
