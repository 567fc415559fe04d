//! Seed resolution for the graph generator.
//!
//! A requested seed of `0` means "pick one for me". Resolving that request is
//! the only non-deterministic step in the crate and happens here, before the
//! generator runs, so [`crate::GraphGenerator::generate`] stays a pure
//! function of its configuration and a [`ResolvedSeed`].

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;

/// Generator state derived from a caller's seed request.
///
/// # Examples
/// ```
/// use graphgen_core::{ClockSeedSource, ResolvedSeed};
///
/// let fixed = ResolvedSeed::resolve(7, &mut ClockSeedSource);
/// assert_eq!(fixed, ResolvedSeed::new(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedSeed(u32);

impl ResolvedSeed {
    /// Wraps an already chosen generator state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(state: u32) -> Self { Self(state) }

    /// Returns the raw generator state.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u32 { self.0 }

    /// Uses `requested` verbatim when it is nonzero and asks `source` for a
    /// fresh state otherwise.
    #[must_use]
    pub fn resolve<S: SeedSource + ?Sized>(requested: u32, source: &mut S) -> Self {
        if requested == 0 {
            Self(source.derive_seed())
        } else {
            Self(requested)
        }
    }
}

/// Strategy that supplies generator state for zero-seed requests.
pub trait SeedSource {
    /// Produces a fresh generator state.
    fn derive_seed(&mut self) -> u32;
}

static CLOCK_SEED_CALLS: AtomicU32 = AtomicU32::new(0);
static CLOCK_SEED_BASE: OnceLock<u32> = OnceLock::new();

/// Odd multiplier that spreads consecutive call numbers across the whole
/// `u32` range. Being odd makes the multiplication a bijection.
const CALL_SPREAD: u32 = 0x9E37_79B9;

/// Derives seeds from a wall-clock base sampled once per process, mixed
/// with a process-wide call counter.
///
/// Every call within a process yields a distinct nonzero seed until the
/// counter wraps, even if the clock is coarse or steps backwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeedSource;

impl ClockSeedSource {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "only the low 32 bits of the nanosecond clock are needed"
    )]
    fn base() -> u32 {
        *CLOCK_SEED_BASE.get_or_init(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u32)
        })
    }
}

impl SeedSource for ClockSeedSource {
    fn derive_seed(&mut self) -> u32 {
        let base = Self::base();
        loop {
            let call = CLOCK_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
            let seed = base ^ call.wrapping_mul(CALL_SPREAD);
            // Zero asks for a fresh seed, so it cannot be handed out.
            if seed != 0 {
                return seed;
            }
        }
    }
}

/// Draws seeds from any [`rand`] generator.
///
/// # Examples
/// ```
/// use graphgen_core::{ResolvedSeed, RngSeedSource};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut left = RngSeedSource::new(SmallRng::seed_from_u64(3));
/// let mut right = RngSeedSource::new(SmallRng::seed_from_u64(3));
/// assert_eq!(
///     ResolvedSeed::resolve(0, &mut left),
///     ResolvedSeed::resolve(0, &mut right),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RngSeedSource<R> {
    rng: R,
}

impl<R: RngCore> RngSeedSource<R> {
    /// Wraps `rng` as a seed source.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> SeedSource for RngSeedSource<R> {
    fn derive_seed(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
