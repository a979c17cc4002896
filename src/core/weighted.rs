//! Discrete weighted random selection.

use rand::Rng;

/// Pick one category with probability `weight / sum(weights)`.
///
/// The total is treated as at least 1, so all-zero or negative weights fall
/// back to the first category instead of panicking. Returns `None` only for
/// an empty table.
///
/// # Arguments
/// * `weights` - Category/weight pairs, walked in order
/// * `rng` - Random number generator
pub fn weighted_pick<K: Copy>(weights: &[(K, i64)], rng: &mut impl Rng) -> Option<K> {
    let first = weights.first()?.0;
    let total: i64 = weights.iter().map(|(_, w)| *w).sum::<i64>().max(1);
    let mut roll = rng.gen_range(0..total);

    for (key, weight) in weights {
        if roll < *weight {
            return Some(*key);
        }
        roll -= weight;
    }

    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_weighted_pick_fairness() {
        let weights = [('A', 80), ('B', 15), ('C', 5)];
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws = 100_000;
        let mut counts = [0u32; 3];

        for _ in 0..draws {
            match weighted_pick(&weights, &mut rng) {
                Some('A') => counts[0] += 1,
                Some('B') => counts[1] += 1,
                Some('C') => counts[2] += 1,
                other => panic!("unexpected pick {:?}", other),
            }
        }

        let freq = |c: u32| c as f64 / draws as f64;
        assert!((freq(counts[0]) - 0.80).abs() < 0.01, "A: {}", freq(counts[0]));
        assert!((freq(counts[1]) - 0.15).abs() < 0.01, "B: {}", freq(counts[1]));
        assert!((freq(counts[2]) - 0.05).abs() < 0.01, "C: {}", freq(counts[2]));
    }

    #[test]
    fn test_weighted_pick_deterministic_with_seed() {
        let weights = [(1u8, 10), (2, 20), (3, 30)];
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(weighted_pick(&weights, &mut a), weighted_pick(&weights, &mut b));
        }
    }

    #[test]
    fn test_all_zero_weights_fall_back_to_first() {
        let weights = [("x", 0), ("y", 0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(weighted_pick(&weights, &mut rng), Some("x"));
        }
    }

    #[test]
    fn test_negative_weights_do_not_panic() {
        let weights = [("x", -5), ("y", -1)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(weighted_pick(&weights, &mut rng), Some("x"));
    }

    #[test]
    fn test_zero_weight_category_never_picked() {
        let weights = [("never", 0), ("always", 10)];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(weighted_pick(&weights, &mut rng), Some("always"));
        }
    }

    #[test]
    fn test_empty_table() {
        let weights: [(u8, i64); 0] = [];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(weighted_pick(&weights, &mut rng), None);
    }
}
