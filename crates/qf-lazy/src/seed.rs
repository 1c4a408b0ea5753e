//! Seeds for random total orders.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeds are folded into `0..SEED_RANGE`.
pub const SEED_RANGE: u64 = (1 << 32) - 1;

/// A seed for callers that did not pick one.
///
/// Mixes wall-clock time, the address of `instance` and the process id, so
/// concurrent samplers in one process or across processes diverge.
pub fn default_seed<T>(instance: &T) -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let addr = instance as *const T as usize as u64;
    let pid = u64::from(std::process::id());
    (nanos ^ addr.rotate_left(21) ^ pid.rotate_left(43)) % SEED_RANGE
}

/// `count` distinct seeds drawn reproducibly from `base`.
pub fn derive_seeds(base: u64, count: usize) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(base);
    let mut seen = HashSet::with_capacity(count);
    let mut seeds = Vec::with_capacity(count);
    while seeds.len() < count {
        let seed = rng.gen_range(0..SEED_RANGE);
        if seen.insert(seed) {
            seeds.push(seed);
        }
    }
    seeds
}
