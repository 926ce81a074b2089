//! Immigration of wild-type individuals.
//!
//! Migration is the rescue mechanism's fuel: every generation a
//! Poisson-distributed number of wild-type individuals arrives from outside
//! the modeled patch, replenishing the pool that mutation converts. Because
//! arrivals are always wild-type, extinction of the whole population is
//! structurally impossible whenever the migration rate is positive.

use crate::evolution::poisson_count;
use rand::Rng;

/// Draw the number of wild-type immigrants arriving this generation.
///
/// The count is Poisson-distributed with mean `migration_rate`. A rate of
/// zero yields zero immigrants.
pub fn sample_immigrants<R: Rng + ?Sized>(migration_rate: f64, rng: &mut R) -> u64 {
    poisson_count(migration_rate, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_zero_rate_yields_no_immigrants() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(sample_immigrants(0.0, &mut rng), 0);
        }
    }

    #[test]
    fn test_immigrant_mean_matches_rate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let n = 10_000;
        let total: u64 = (0..n).map(|_| sample_immigrants(3.0, &mut rng)).sum();
        let empirical = total as f64 / n as f64;
        assert!((empirical - 3.0).abs() < 0.2);
    }

    #[test]
    fn test_immigration_deterministic_under_seed() {
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(123);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(123);
        let a: Vec<u64> = (0..50).map(|_| sample_immigrants(2.5, &mut rng1)).collect();
        let b: Vec<u64> = (0..50).map(|_| sample_immigrants(2.5, &mut rng2)).collect();
        assert_eq!(a, b);
    }
}
