//! Legacy pair predictor: scores every two-ball combination (a < b ≤ 49)
//! with a linear blend of per-ball frequency, pair co-occurrence, overdue
//! and balance bonuses, then samples from the top of the ranking.

use anyhow::Result;

use crate::data::LEGACY_DRAWS;
use crate::models::{DatasetSummary, PairPrediction, Pick};
use crate::sampler::{apply_jitter, normalize, sample_without_replacement, seeded_rng};

const RECENCY_FACTOR: f64 = 0.15;
const GLOBAL_WEIGHT: f64 = 0.35;
const PAIR_WEIGHT: f64 = 0.20;
const OVERDUE_WEIGHT: f64 = 0.17;
const SPREAD_BONUS: f64 = 0.18;
const PARITY_BONUS: f64 = 0.12;
const SUM_BAND_BONUS: f64 = 0.1;
const SPREAD_THRESHOLD: u8 = 10;
const CANDIDATE_POOL: usize = 250;
const MAX_PICKS: usize = 10;

/// Per-ball score: one point per appearance plus a recency term.
fn ball_scores() -> [f64; 50] {
    let mut scores = [0.0f64; 50];
    let n_draws = LEGACY_DRAWS.len();
    for (index, draw) in LEGACY_DRAWS.iter().enumerate() {
        let recency = (n_draws - index) as f64;
        for &ball in &draw.numbers {
            scores[ball as usize] += 1.0 + recency * RECENCY_FACTOR;
        }
    }
    scores
}

/// Draws since each ball was last seen, as a fraction of the history
/// length. Never-seen balls score 1.
fn overdue_scores() -> [f64; 50] {
    let n_draws = LEGACY_DRAWS.len();
    let mut last_seen = [n_draws; 50];
    for (index, draw) in LEGACY_DRAWS.iter().enumerate() {
        for &ball in &draw.numbers {
            if last_seen[ball as usize] == n_draws {
                last_seen[ball as usize] = index;
            }
        }
    }
    let mut scores = [0.0f64; 50];
    for ball in 1..=49 {
        scores[ball] = last_seen[ball] as f64 / n_draws as f64;
    }
    scores
}

/// How often each pair appeared together in one draw.
fn pair_counts() -> [[u32; 50]; 50] {
    let mut counts = [[0u32; 50]; 50];
    for draw in LEGACY_DRAWS.iter() {
        for i in 0..draw.numbers.len() {
            for j in (i + 1)..draw.numbers.len() {
                let a = draw.numbers[i].min(draw.numbers[j]) as usize;
                let b = draw.numbers[i].max(draw.numbers[j]) as usize;
                counts[a][b] += 1;
            }
        }
    }
    counts
}

/// Mean and standard deviation of a+b over every pair drawn together.
fn pair_sum_stats() -> (f64, f64) {
    let mut sums: Vec<f64> = Vec::new();
    for draw in LEGACY_DRAWS.iter() {
        for i in 0..draw.numbers.len() {
            for j in (i + 1)..draw.numbers.len() {
                sums.push((draw.numbers[i] as u32 + draw.numbers[j] as u32) as f64);
            }
        }
    }
    if sums.is_empty() {
        return (50.0, 1.0);
    }
    let mean = sums.iter().sum::<f64>() / sums.len() as f64;
    let variance = sums.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / sums.len() as f64;
    let std_dev = variance.sqrt();
    (mean, if std_dev > 0.0 { std_dev } else { 1.0 })
}

/// All 1,176 pairs scored and sorted best first. Value format is the two
/// zero-padded halves concatenated, e.g. pair (3, 41) -> "0341".
pub fn scored_pairs() -> Vec<(String, f64)> {
    let scores = ball_scores();
    let overdue = overdue_scores();
    let counts = pair_counts();
    let (mean_sum, std_sum) = pair_sum_stats();

    let mut pairs = Vec::with_capacity(1176);
    for a in 1u8..=49 {
        for b in (a + 1)..=49 {
            let global = scores[a as usize] + scores[b as usize];
            let co_occurrence = counts[a as usize][b as usize] as f64;
            let overdue_pair = overdue[a as usize] + overdue[b as usize];
            let spread_bonus = if b - a >= SPREAD_THRESHOLD {
                SPREAD_BONUS
            } else {
                0.0
            };
            let parity_bonus = if a % 2 != b % 2 { PARITY_BONUS } else { 0.0 };
            let z = ((a as u32 + b as u32) as f64 - mean_sum) / std_sum;
            let sum_band_bonus = SUM_BAND_BONUS * (-0.5 * z * z).exp();

            let score = GLOBAL_WEIGHT * global
                + PAIR_WEIGHT * co_occurrence
                + OVERDUE_WEIGHT * overdue_pair
                + spread_bonus
                + parity_bonus
                + sum_band_bonus;
            pairs.push((format!("{a:02}{b:02}"), score));
        }
    }

    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs
}

pub fn predict(count: usize, seed: u64, randomness: f64) -> Result<PairPrediction> {
    let mut ranked = scored_pairs();
    ranked.truncate(CANDIDATE_POOL);
    normalize(&mut ranked);

    let mut rng = seeded_rng(seed);
    apply_jitter(&mut ranked, &mut rng, randomness);

    let size = count.clamp(1, MAX_PICKS);
    let picks = sample_without_replacement(&ranked, size, &mut rng)?
        .into_iter()
        .map(|(value, probability)| Pick { value, probability })
        .collect();

    Ok(PairPrediction { picks })
}

pub fn dataset_summary() -> DatasetSummary {
    let mut balls: Vec<u8> = LEGACY_DRAWS
        .iter()
        .flat_map(|d| d.numbers.iter().copied())
        .collect();
    balls.sort();
    balls.dedup();
    let mut dates: Vec<&str> = LEGACY_DRAWS.iter().map(|d| d.date).collect();
    dates.sort();
    DatasetSummary {
        total_rows: LEGACY_DRAWS.len(),
        unique_values: balls.len(),
        date_from: dates.first().copied().unwrap_or("").to_string(),
        date_to: dates.last().copied().unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_scored() {
        let pairs = scored_pairs();
        assert_eq!(pairs.len(), 1176);
        assert!(pairs.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_pair_values_well_formed() {
        for (value, score) in scored_pairs() {
            assert_eq!(value.len(), 4);
            let a: u8 = value[0..2].parse().unwrap();
            let b: u8 = value[2..4].parse().unwrap();
            assert!((1..=49).contains(&a));
            assert!((1..=49).contains(&b));
            assert!(a < b);
            assert!(score > 0.0);
        }
    }

    #[test]
    fn test_co_occurring_pair_outranks_unseen_neighbors() {
        // 10 and 15 were drawn together; with identical per-ball history a
        // pair never seen together scores strictly lower.
        let counts = pair_counts();
        assert!(counts[10][15] >= 1);
        assert_eq!(counts[10][16], 0);
    }

    #[test]
    fn test_overdue_never_seen_is_one() {
        let overdue = overdue_scores();
        // 2 is absent from every legacy draw.
        assert_eq!(overdue[2], 1.0);
        // 10 appears in the most recent draw.
        assert_eq!(overdue[10], 0.0);
    }

    #[test]
    fn test_predict_no_duplicate_picks() {
        let prediction = predict(10, 42, 0.5).unwrap();
        assert_eq!(prediction.picks.len(), 10);
        let mut values: Vec<&str> = prediction.picks.iter().map(|p| p.value.as_str()).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 10);
    }

    #[test]
    fn test_predict_deterministic_for_seed() {
        let a = predict(5, 123, 0.0).unwrap();
        let b = predict(5, 123, 0.0).unwrap();
        assert_eq!(a.picks, b.picks);
    }

    #[test]
    fn test_predict_samples_from_truncated_pool() {
        let ranked = scored_pairs();
        let floor = ranked[CANDIDATE_POOL - 1].1;
        let prediction = predict(10, 42, 0.0).unwrap();
        for pick in &prediction.picks {
            let score = ranked
                .iter()
                .find(|(v, _)| v == &pick.value)
                .map(|(_, s)| *s)
                .unwrap();
            assert!(score >= floor, "{} scored below the pool floor", pick.value);
        }
    }

    #[test]
    fn test_dataset_summary() {
        let summary = dataset_summary();
        assert_eq!(summary.total_rows, 8);
        assert_eq!(summary.date_from, "2024-03-14");
        assert_eq!(summary.date_to, "2026-02-09");
    }
}
