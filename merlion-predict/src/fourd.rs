//! 4D digit predictor: blends the official top-100 frequency table with
//! recent prize records, scores every number 0000..=9999, and samples a
//! duplicate-free pick set from the top of the ranking.

use std::collections::HashMap;

use anyhow::Result;

use crate::data::{FOURD_TOP_100, RECENT_FOURD_DRAWS};
use crate::models::{
    DatasetSummary, FourdPrediction, FourdRecord, Pick, PositionProbability, PrizeCode,
};
use crate::sampler::{apply_jitter, normalize, sample_without_replacement, seeded_rng};

const RECENCY_FACTOR: f64 = 0.22;
const NUMBER_FREQ_WEIGHT: f64 = 2.9;
const POSITION_FREQ_WEIGHT: f64 = 1.8;
const HISTORICAL_BLEND: f64 = 1.35;
const POSITIONAL_BLEND: f64 = 0.7;
const CANDIDATE_POOL: usize = 800;
const MAX_PICKS: usize = 10;

/// Expand each draw into per-number prize records, most recent draw first.
pub fn flatten_records() -> Vec<FourdRecord> {
    let mut records = Vec::with_capacity(RECENT_FOURD_DRAWS.len() * 23);
    for draw in RECENT_FOURD_DRAWS.iter() {
        for (idx, number) in draw.numbers.iter().enumerate() {
            let prize_code = match idx {
                0 => PrizeCode::First,
                1 => PrizeCode::Second,
                2 => PrizeCode::Third,
                3..=12 => PrizeCode::Starter,
                _ => PrizeCode::Consolation,
            };
            records.push(FourdRecord {
                draw_date: draw.draw_date,
                draw_no: draw.draw_no,
                prize_code,
                number,
            });
        }
    }
    records.sort_by(|a, b| b.draw_date.cmp(a.draw_date));
    records
}

/// Whole-number score map: prize weight plus a recency term per record
/// occurrence, plus the frequency-table contribution.
fn score_number_map(records: &[FourdRecord]) -> HashMap<&'static str, f64> {
    let mut map: HashMap<&'static str, f64> = HashMap::new();
    let latest_weight = RECENT_FOURD_DRAWS.len() as f64;

    for record in records {
        let recency = RECENT_FOURD_DRAWS
            .iter()
            .position(|d| d.draw_no == record.draw_no)
            .map_or(0.0, |i| latest_weight - i as f64);
        let score = record.prize_code.weight() + recency * RECENCY_FACTOR;
        *map.entry(record.number).or_insert(0.0) += score;
    }

    for &(number, times) in FOURD_TOP_100.iter() {
        *map.entry(number).or_insert(0.0) += times as f64 * NUMBER_FREQ_WEIGHT;
    }

    map
}

/// Per-position digit weights accumulated over records and the frequency
/// table; rows are positions 1-4, columns digits 0-9.
pub fn position_digit_weights(records: &[FourdRecord]) -> [[f64; 10]; 4] {
    let mut matrix = [[0.0f64; 10]; 4];

    for record in records {
        let base = record.prize_code.weight();
        for (idx, c) in record.number.chars().take(4).enumerate() {
            if let Some(d) = c.to_digit(10) {
                matrix[idx][d as usize] += base;
            }
        }
    }

    for &(number, times) in FOURD_TOP_100.iter() {
        for (idx, c) in number.chars().take(4).enumerate() {
            if let Some(d) = c.to_digit(10) {
                matrix[idx][d as usize] += times as f64 * POSITION_FREQ_WEIGHT;
            }
        }
    }

    matrix
}

/// Row-normalize the weight matrix into per-position distributions.
pub fn position_probabilities(matrix: &[[f64; 10]; 4]) -> Vec<PositionProbability> {
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let total: f64 = row.iter().sum();
            let digits = row
                .iter()
                .map(|&w| if total > 0.0 { w / total } else { 0.0 })
                .collect();
            PositionProbability {
                position: i + 1,
                digits,
            }
        })
        .collect()
}

fn unique_digit_count(value: &str) -> usize {
    let mut seen = [false; 10];
    for d in value.chars().filter_map(|c| c.to_digit(10)) {
        seen[d as usize] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

/// Score all 10,000 candidates and sort them best first. The diversity
/// boost nudges repeated-digit numbers down and all-distinct numbers up.
fn build_candidates(records: &[FourdRecord]) -> Vec<(String, f64)> {
    let map = score_number_map(records);
    let matrix = position_digit_weights(records);

    let mut candidates = Vec::with_capacity(10_000);
    for i in 0..=9999u32 {
        let value = format!("{i:04}");
        let historical = map.get(value.as_str()).copied().unwrap_or(0.0);
        let positional: f64 = value
            .chars()
            .enumerate()
            .filter_map(|(idx, c)| c.to_digit(10).map(|d| matrix[idx][d as usize]))
            .sum();
        let diversity_boost = match unique_digit_count(&value) {
            0..=2 => 0.9,
            3 => 1.0,
            _ => 1.06,
        };
        let score = (historical * HISTORICAL_BLEND + positional * POSITIONAL_BLEND) * diversity_boost;
        candidates.push((value, score));
    }

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

pub fn predict(count: usize, seed: u64, randomness: f64) -> Result<FourdPrediction> {
    let records = flatten_records();

    let mut ranked = build_candidates(&records);
    ranked.truncate(CANDIDATE_POOL);
    normalize(&mut ranked);

    let mut rng = seeded_rng(seed);
    apply_jitter(&mut ranked, &mut rng, randomness);

    let size = count.clamp(1, MAX_PICKS);
    let picks = sample_without_replacement(&ranked, size, &mut rng)?
        .into_iter()
        .map(|(value, probability)| Pick { value, probability })
        .collect();

    Ok(FourdPrediction {
        picks,
        position_probabilities: position_probabilities(&position_digit_weights(&records)),
    })
}

pub fn dataset_summary() -> DatasetSummary {
    let records = flatten_records();
    let mut numbers: Vec<&str> = records.iter().map(|r| r.number).collect();
    numbers.sort();
    numbers.dedup();
    let mut dates: Vec<&str> = records.iter().map(|r| r.draw_date).collect();
    dates.sort();
    dates.dedup();
    DatasetSummary {
        total_rows: records.len(),
        unique_values: numbers.len(),
        date_from: dates.first().copied().unwrap_or("").to_string(),
        date_to: dates.last().copied().unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_distribution;

    #[test]
    fn test_flatten_assigns_prize_codes_by_slot() {
        let records = flatten_records();
        assert_eq!(records.len(), RECENT_FOURD_DRAWS.len() * 23);
        let latest: Vec<&FourdRecord> = records.iter().filter(|r| r.draw_no == "5449").collect();
        assert_eq!(latest[0].prize_code, PrizeCode::First);
        assert_eq!(latest[1].prize_code, PrizeCode::Second);
        assert_eq!(latest[2].prize_code, PrizeCode::Third);
        assert_eq!(latest[3].prize_code, PrizeCode::Starter);
        assert_eq!(latest[12].prize_code, PrizeCode::Starter);
        assert_eq!(latest[13].prize_code, PrizeCode::Consolation);
        assert_eq!(latest[22].prize_code, PrizeCode::Consolation);
    }

    #[test]
    fn test_records_sorted_most_recent_first() {
        let records = flatten_records();
        assert!(records
            .windows(2)
            .all(|w| w[0].draw_date >= w[1].draw_date));
    }

    #[test]
    fn test_position_probabilities_rows_sum_to_one() {
        let records = flatten_records();
        let probs = position_probabilities(&position_digit_weights(&records));
        assert_eq!(probs.len(), 4);
        for row in &probs {
            assert!(
                validate_distribution(&row.digits, 10),
                "position {} does not sum to 1",
                row.position
            );
        }
    }

    #[test]
    fn test_candidates_cover_full_space() {
        let records = flatten_records();
        let candidates = build_candidates(&records);
        assert_eq!(candidates.len(), 10_000);
        assert!(candidates.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_most_frequent_number_ranks_in_pool() {
        let records = flatten_records();
        let candidates = build_candidates(&records);
        let rank = candidates
            .iter()
            .position(|(v, _)| v == "9395")
            .expect("9395 present");
        assert!(rank < CANDIDATE_POOL, "9395 ranked {rank}");
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
        let a = predict(5, 42, 0.0).unwrap();
        let b = predict(5, 42, 0.0).unwrap();
        assert_eq!(a.picks, b.picks);

        let c = predict(5, 42, 0.3).unwrap();
        let d = predict(5, 42, 0.3).unwrap();
        assert_eq!(c.picks, d.picks);
    }

    #[test]
    fn test_predict_clamps_count() {
        assert_eq!(predict(0, 42, 0.0).unwrap().picks.len(), 1);
        assert_eq!(predict(50, 42, 0.0).unwrap().picks.len(), 10);
    }

    #[test]
    fn test_dataset_summary() {
        let summary = dataset_summary();
        assert_eq!(summary.total_rows, 253);
        assert!(summary.unique_values > 200);
        assert_eq!(summary.date_from, "2024-04-03");
        assert_eq!(summary.date_to, "2026-02-25");
    }
}
