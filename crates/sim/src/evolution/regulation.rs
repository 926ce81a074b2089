//! Density regulation against the carrying capacity.
//!
//! When the unconstrained offspring pool exceeds the carrying capacity, the
//! survivors are chosen by binomial thinning: each of the `capacity` slots is
//! filled wild-type with probability equal to the wild-type share of the
//! pool. The post-regulation total then equals the capacity exactly, which is
//! also what makes the trajectory's exact-equality stopping test fire
//! reliably.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

/// Enforce the carrying capacity on an offspring pool.
///
/// Pools at or under `capacity` pass through untouched. An overshooting pool
/// is thinned to exactly `capacity` individuals, with the wild-type share
/// drawn as `Binomial(capacity, wildtype / total)` and the mutant share the
/// remainder.
pub fn enforce_capacity<R: Rng + ?Sized>(
    wildtype: u64,
    mutant: u64,
    capacity: u64,
    rng: &mut R,
) -> (u64, u64) {
    let total = wildtype + mutant;
    if total <= capacity {
        return (wildtype, mutant);
    }

    let wildtype_share = wildtype as f64 / total as f64;
    let dist = Binomial::new(capacity, wildtype_share)
        .expect("wild-type share is a probability in [0, 1]");
    let surviving_wildtype = dist.sample(rng);
    (surviving_wildtype, capacity - surviving_wildtype)
}
