//! Toto 6-ball predictor: blends the official winning-number frequency
//! table with recent draws and an overdue bonus, then samples whole sets
//! from the resulting ball distribution.

use anyhow::Result;
use rand::rngs::StdRng;

use crate::data::{RECENT_TOTO_DRAWS, TOTO_FREQUENCY};
use crate::models::{BallProbability, DatasetSummary, ProbabilityTag, TotoPrediction, TotoSet};
use crate::sampler::{apply_jitter, sample_without_replacement, seeded_rng};

const MAIN_FREQ_WEIGHT: f64 = 1.35;
const ADDITIONAL_FREQ_WEIGHT: f64 = 0.4;
const RECENT_MAIN_WEIGHT: f64 = 8.5;
const RECENT_ADDITIONAL_WEIGHT: f64 = 2.5;
const OVERDUE_WEIGHT: f64 = 16.0;
const POOL_SIZE: usize = 49;
const BALLS_PER_SET: usize = 6;
const MAX_SETS: usize = 10;
const MAX_SET_ATTEMPTS: usize = 300;
const HOT_COLD_THRESHOLD: f64 = 0.3;

/// Normalized ball distribution, sorted most probable first, tagged
/// hot/cold at ±30% deviation from uniform.
pub fn ball_probabilities() -> Vec<BallProbability> {
    let mut recent_main = [0u32; POOL_SIZE + 1];
    let mut recent_additional = [0u32; POOL_SIZE + 1];
    let mut last_seen: [Option<usize>; POOL_SIZE + 1] = [None; POOL_SIZE + 1];

    for (index, draw) in RECENT_TOTO_DRAWS.iter().enumerate() {
        for &ball in &draw.winning {
            recent_main[ball as usize] += 1;
            last_seen[ball as usize].get_or_insert(index);
        }
        recent_additional[draw.additional as usize] += 1;
        last_seen[draw.additional as usize].get_or_insert(index);
    }

    let n_draws = RECENT_TOTO_DRAWS.len() as f64;
    let scored: Vec<(u8, f64)> = TOTO_FREQUENCY
        .iter()
        .map(|row| {
            let b = row.ball as usize;
            let last = last_seen[b].unwrap_or(RECENT_TOTO_DRAWS.len()) as f64;
            let overdue_bonus = last / n_draws * OVERDUE_WEIGHT;
            let score = row.main_freq as f64 * MAIN_FREQ_WEIGHT
                + row.additional_freq as f64 * ADDITIONAL_FREQ_WEIGHT
                + recent_main[b] as f64 * RECENT_MAIN_WEIGHT
                + recent_additional[b] as f64 * RECENT_ADDITIONAL_WEIGHT
                + overdue_bonus;
            (row.ball, score)
        })
        .collect();

    let total: f64 = scored.iter().map(|(_, s)| *s).sum();
    let uniform = 1.0 / POOL_SIZE as f64;

    let mut probs: Vec<BallProbability> = scored
        .into_iter()
        .map(|(ball, score)| {
            let probability = score / total;
            let deviation = (probability - uniform) / uniform;
            let tag = if deviation > HOT_COLD_THRESHOLD {
                ProbabilityTag::Hot
            } else if deviation < -HOT_COLD_THRESHOLD {
                ProbabilityTag::Cold
            } else {
                ProbabilityTag::Normal
            };
            BallProbability {
                ball,
                probability,
                tag,
            }
        })
        .collect();

    probs.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    probs
}

/// Six distinct balls plus an additional from the leftover pool.
/// Confidence is the summed pool probability of the six.
fn create_set(pool: &[(u8, f64)], rng: &mut StdRng) -> Result<TotoSet> {
    let picked = sample_without_replacement(pool, BALLS_PER_SET, rng)?;
    let confidence: f64 = picked.iter().map(|(_, p)| *p).sum();

    let mut numbers = [0u8; BALLS_PER_SET];
    for (slot, (ball, _)) in numbers.iter_mut().zip(picked.iter()) {
        *slot = *ball;
    }
    numbers.sort();

    let remaining: Vec<(u8, f64)> = pool
        .iter()
        .filter(|(ball, _)| !numbers.contains(ball))
        .cloned()
        .collect();
    let additional_pool = if remaining.is_empty() {
        pool.to_vec()
    } else {
        remaining
    };
    let additional = sample_without_replacement(&additional_pool, 1, rng)?
        .first()
        .map(|(ball, _)| *ball)
        .unwrap_or(numbers[0]);

    Ok(TotoSet {
        numbers,
        additional,
        confidence,
    })
}

pub fn predict(count: usize, seed: u64, randomness: f64) -> Result<TotoPrediction> {
    let base = ball_probabilities();
    let mut pool: Vec<(u8, f64)> = base.iter().map(|p| (p.ball, p.probability)).collect();

    let mut rng = seeded_rng(seed);
    apply_jitter(&mut pool, &mut rng, randomness);

    let size = count.clamp(1, MAX_SETS);
    let mut sets: Vec<TotoSet> = Vec::with_capacity(size);
    let mut attempts = 0;
    while sets.len() < size && attempts < MAX_SET_ATTEMPTS {
        attempts += 1;
        let set = create_set(&pool, &mut rng)?;
        if !sets.iter().any(|s| s.numbers == set.numbers) {
            sets.push(set);
        }
    }

    Ok(TotoPrediction {
        sets,
        ball_probabilities: base,
    })
}

pub fn dataset_summary() -> DatasetSummary {
    let mut balls: Vec<u8> = RECENT_TOTO_DRAWS
        .iter()
        .flat_map(|d| d.winning.iter().copied().chain(std::iter::once(d.additional)))
        .collect();
    balls.sort();
    balls.dedup();
    let mut dates: Vec<&str> = RECENT_TOTO_DRAWS.iter().map(|d| d.draw_date).collect();
    dates.sort();
    DatasetSummary {
        total_rows: RECENT_TOTO_DRAWS.len(),
        unique_values: balls.len(),
        date_from: dates.first().copied().unwrap_or("").to_string(),
        date_to: dates.last().copied().unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_distribution;

    #[test]
    fn test_ball_probabilities_sum_to_one() {
        let probs = ball_probabilities();
        let dist: Vec<f64> = probs.iter().map(|p| p.probability).collect();
        assert!(validate_distribution(&dist, POOL_SIZE));
    }

    #[test]
    fn test_ball_probabilities_sorted_descending() {
        let probs = ball_probabilities();
        assert!(probs
            .windows(2)
            .all(|w| w[0].probability >= w[1].probability));
    }

    #[test]
    fn test_ball_probabilities_cover_all_balls() {
        let mut balls: Vec<u8> = ball_probabilities().iter().map(|p| p.ball).collect();
        balls.sort();
        let expected: Vec<u8> = (1..=49).collect();
        assert_eq!(balls, expected);
    }

    #[test]
    fn test_recent_ball_scores_above_stale_ball() {
        // Ball 13 appears in the most recent draw; its score picks up the
        // full recent-main weight that a ball absent from every recent
        // draw cannot.
        let probs = ball_probabilities();
        let p13 = probs.iter().find(|p| p.ball == 13).map(|p| p.probability);
        let p7 = probs.iter().find(|p| p.ball == 7).map(|p| p.probability);
        assert!(p13 > p7, "{p13:?} should exceed {p7:?}");
    }

    #[test]
    fn test_sets_are_distinct_sorted_and_in_range() {
        let prediction = predict(5, 42, 0.18).unwrap();
        assert_eq!(prediction.sets.len(), 5);
        for set in &prediction.sets {
            assert!(set.numbers.windows(2).all(|w| w[0] < w[1]));
            assert!(set.numbers.iter().all(|b| (1..=49).contains(b)));
            assert!((1..=49).contains(&set.additional));
            assert!(!set.numbers.contains(&set.additional));
            assert!(set.confidence > 0.0);
        }
    }

    #[test]
    fn test_no_duplicate_sets() {
        let prediction = predict(10, 42, 0.18).unwrap();
        for i in 0..prediction.sets.len() {
            for j in (i + 1)..prediction.sets.len() {
                assert_ne!(prediction.sets[i].numbers, prediction.sets[j].numbers);
            }
        }
    }

    #[test]
    fn test_predict_deterministic_for_seed() {
        let a = predict(5, 42, 0.0).unwrap();
        let b = predict(5, 42, 0.0).unwrap();
        assert_eq!(a.sets, b.sets);

        let c = predict(5, 7, 1.0).unwrap();
        let d = predict(5, 7, 1.0).unwrap();
        assert_eq!(c.sets, d.sets);
    }

    #[test]
    fn test_predict_clamps_count() {
        assert_eq!(predict(0, 42, 0.0).unwrap().sets.len(), 1);
        assert_eq!(predict(99, 42, 0.0).unwrap().sets.len(), 10);
    }

    #[test]
    fn test_dataset_summary() {
        let summary = dataset_summary();
        assert_eq!(summary.total_rows, 28);
        assert_eq!(summary.date_from, "2025-11-13");
        assert_eq!(summary.date_to, "2026-02-16");
    }
}
