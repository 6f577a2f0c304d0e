use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Golden-ratio increment used to spread worker indices across the seed space.
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fresh base seed drawn from the OS-seeded thread RNG.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Distinct workers always get distinct seeds: `(worker + 1) * STREAM_MIX`
/// is injective modulo 2^64 because the multiplier is odd.
#[inline]
pub fn worker_seed(base_seed: u64, worker: usize) -> u64 {
    base_seed.wrapping_add((worker as u64).wrapping_add(1).wrapping_mul(STREAM_MIX))
}

pub fn worker_rng(base_seed: u64, worker: usize) -> Pcg64 {
    Pcg64::seed_from_u64(worker_seed(base_seed, worker))
}
