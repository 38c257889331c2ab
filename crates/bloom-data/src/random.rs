//! Seeded pseudo-random stream used by dataset generation.
//!
//! [`Mulberry32`] keeps a single `u32` of state and mixes it with wrapping
//! 32-bit arithmetic on every call, so a given seed yields the same stream on
//! every platform. Pickers consume the stream through [`UniformSource`].

use rand::RngCore;

/// Divisor mapping a 32-bit word onto `[0, 1)`.
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Per-call state increment.
const STATE_INCREMENT: u32 = 0x6D2B_79F5;

/// A source of uniform draws in `[0, 1)`.
///
/// Every [`RngCore`] implements this by scaling `next_u32` by `2^32`, which
/// is exactly how [`Mulberry32`] produces its unit draws.
pub trait UniformSource {
    /// Returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> UniformSource for R {
    #[expect(
        clippy::float_arithmetic,
        reason = "unit draws are defined as a float division"
    )]
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / UNIT_SCALE
    }
}

/// Deterministic 32-bit generator.
///
/// # Examples
///
/// ```
/// use bloom_data::{Mulberry32, UniformSource};
///
/// let mut first = Mulberry32::new(42);
/// let mut second = Mulberry32::new(42);
/// for _ in 0..8 {
///     let draw = first.next_unit();
///     assert!((0.0..1.0).contains(&draw));
///     assert_eq!(draw.to_bits(), second.next_unit().to_bits());
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a stream positioned at the start of `seed`'s sequence.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    const fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let state = self.state;
        let mut mixed = (state ^ (state >> 15)).wrapping_mul(1 | state);
        mixed = mixed.wrapping_add((mixed ^ (mixed >> 7)).wrapping_mul(61 | mixed)) ^ mixed;
        mixed ^ (mixed >> 14)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_word());
        let low = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let word = self.next_word().to_be_bytes();
            for (byte, value) in chunk.iter_mut().zip(word) {
                *byte = value;
            }
        }
    }
}
