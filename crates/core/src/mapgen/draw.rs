//! Uniform draws over a caller-supplied random source.

use rand_chacha::rand_core::Rng;

const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

/// Uniform value in `[0, 1)` built from the top 53 bits of one `u64`.
pub(super) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// Uniform integer in `min_value..=max_value`.
pub(super) fn inclusive<R: Rng + ?Sized>(rng: &mut R, min_value: u32, max_value: u32) -> u32 {
    debug_assert!(min_value <= max_value);
    let range_size = u64::from(max_value - min_value) + 1;
    min_value + ((u64::from(rng.next_u32()) * range_size) >> 32) as u32
}

pub(super) fn coin<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.next_u32() & 1 == 1
}
