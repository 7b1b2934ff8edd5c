use anyhow::Result;
use chrono::Datelike;
use rand::distr::weighted::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Default jitter strength when the caller does not pass one.
pub const DEFAULT_RANDOMNESS: f64 = 0.18;

/// Floor applied after jitter so no candidate can drop to zero weight.
const PROBABILITY_FLOOR: f64 = 1e-7;

/// Deterministic default seed based on today's date (YYYYMMDD).
pub fn date_seed() -> u64 {
    let today = chrono::Local::now().date_naive();
    let y = today.year() as u64;
    let m = today.month() as u64;
    let d = today.day() as u64;
    y * 10_000 + m * 100 + d
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Scale weights in place so they sum to 1. Leaves an all-zero pool alone.
pub fn normalize<T>(pool: &mut [(T, f64)]) {
    let total: f64 = pool.iter().map(|(_, w)| *w).sum();
    if total > 0.0 {
        for (_, w) in pool.iter_mut() {
            *w /= total;
        }
    }
}

/// Multiplicative jitter: each weight becomes `w * (1 + (u*2-1)*randomness)`
/// with u uniform in [0,1), then the pool is renormalized. `randomness` is
/// clamped to [0,1]; 0 leaves the pool untouched.
pub fn apply_jitter<T>(pool: &mut [(T, f64)], rng: &mut StdRng, randomness: f64) {
    let randomness = randomness.clamp(0.0, 1.0);
    if randomness <= 0.0 {
        return;
    }
    for (_, w) in pool.iter_mut() {
        let jitter = 1.0 + (rng.random::<f64>() * 2.0 - 1.0) * randomness;
        *w = (*w * jitter).max(PROBABILITY_FLOOR);
    }
    normalize(pool);
}

/// Weighted sampling without replacement: draw from the remaining weights,
/// remove the winner, repeat. Removal alone reweights the pool, so no
/// renormalization is needed between draws. Returns fewer entries than
/// `count` when the pool runs out first.
pub fn sample_without_replacement<T: Clone>(
    pool: &[(T, f64)],
    count: usize,
    rng: &mut StdRng,
) -> Result<Vec<(T, f64)>> {
    let mut available = pool.to_vec();
    let mut selected = Vec::with_capacity(count.min(available.len()));

    while selected.len() < count && !available.is_empty() {
        let weights: Vec<f64> = available.iter().map(|(_, w)| *w).collect();
        let dist = WeightedIndex::new(&weights)?;
        let idx = dist.sample(rng);
        selected.push(available.remove(idx));
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_pool(n: usize) -> Vec<(usize, f64)> {
        (0..n).map(|i| (i, 1.0 / n as f64)).collect()
    }

    #[test]
    fn test_date_seed_format() {
        let seed = date_seed();
        assert!(seed >= 20_000_000, "seed too small: {seed}");
        assert!(seed <= 99_991_231, "seed too large: {seed}");
        assert_eq!(seed.to_string().len(), 8);
    }

    #[test]
    fn test_date_seed_deterministic() {
        assert_eq!(date_seed(), date_seed());
    }

    #[test]
    fn test_sample_no_duplicates() {
        let pool = uniform_pool(49);
        let mut rng = seeded_rng(42);
        let picked = sample_without_replacement(&pool, 6, &mut rng).unwrap();
        assert_eq!(picked.len(), 6);
        let mut values: Vec<usize> = picked.iter().map(|(v, _)| *v).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 6);
    }

    #[test]
    fn test_sample_deterministic_for_seed() {
        let pool = uniform_pool(49);
        let a = sample_without_replacement(&pool, 6, &mut seeded_rng(123)).unwrap();
        let b = sample_without_replacement(&pool, 6, &mut seeded_rng(123)).unwrap();
        assert_eq!(
            a.iter().map(|(v, _)| *v).collect::<Vec<_>>(),
            b.iter().map(|(v, _)| *v).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sample_exhausted_pool_returns_fewer() {
        let pool = uniform_pool(3);
        let mut rng = seeded_rng(42);
        let picked = sample_without_replacement(&pool, 10, &mut rng).unwrap();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_sample_favors_heavy_weights() {
        let mut pool = uniform_pool(10);
        pool[7].1 = 100.0;
        let mut hits = 0;
        for seed in 0..200 {
            let picked = sample_without_replacement(&pool, 1, &mut seeded_rng(seed)).unwrap();
            if picked[0].0 == 7 {
                hits += 1;
            }
        }
        assert!(hits > 150, "heavy candidate picked only {hits}/200 times");
    }

    #[test]
    fn test_jitter_zero_is_noop() {
        let mut pool = uniform_pool(10);
        let original = pool.clone();
        apply_jitter(&mut pool, &mut seeded_rng(42), 0.0);
        assert_eq!(pool, original);
    }

    #[test]
    fn test_jitter_preserves_normalization() {
        let mut pool = uniform_pool(10);
        apply_jitter(&mut pool, &mut seeded_rng(42), 0.5);
        let sum: f64 = pool.iter().map(|(_, w)| *w).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
        assert!(pool.iter().all(|(_, w)| *w > 0.0));
    }

    #[test]
    fn test_jitter_clamps_randomness() {
        let mut a = uniform_pool(10);
        let mut b = uniform_pool(10);
        apply_jitter(&mut a, &mut seeded_rng(42), 5.0);
        apply_jitter(&mut b, &mut seeded_rng(42), 1.0);
        for ((_, wa), (_, wb)) in a.iter().zip(b.iter()) {
            assert!((wa - wb).abs() < 1e-12);
        }
    }

    #[test]
    fn test_variance_grows_with_randomness() {
        // At randomness 0 the jittered pool is identical across seeds; at 1
        // the first weight varies seed to seed.
        let spread = |randomness: f64| -> f64 {
            let weights: Vec<f64> = (0..50)
                .map(|seed| {
                    let mut pool = uniform_pool(10);
                    apply_jitter(&mut pool, &mut seeded_rng(seed), randomness);
                    pool[0].1
                })
                .collect();
            let mean = weights.iter().sum::<f64>() / weights.len() as f64;
            weights.iter().map(|w| (w - mean).powi(2)).sum::<f64>() / weights.len() as f64
        };

        let low = spread(0.0);
        let high = spread(1.0);
        assert_eq!(low, 0.0);
        assert!(high > low, "variance should grow: {high} vs {low}");
    }

    #[test]
    fn test_normalize_leaves_zero_pool() {
        let mut pool: Vec<(usize, f64)> = vec![(0, 0.0), (1, 0.0)];
        normalize(&mut pool);
        assert!(pool.iter().all(|(_, w)| *w == 0.0));
    }
}
