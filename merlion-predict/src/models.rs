use serde::Serialize;

/// Prize tiers of a 4D draw, top prize first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrizeCode {
    First,
    Second,
    Third,
    Starter,
    Consolation,
}

impl PrizeCode {
    pub fn weight(&self) -> f64 {
        match self {
            PrizeCode::First => 2.6,
            PrizeCode::Second => 2.3,
            PrizeCode::Third => 2.0,
            PrizeCode::Starter => 1.25,
            PrizeCode::Consolation => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrizeCode::First => "1",
            PrizeCode::Second => "2",
            PrizeCode::Third => "3",
            PrizeCode::Starter => "S",
            PrizeCode::Consolation => "C",
        }
    }
}

/// One published 4D draw: top three prizes, ten starters, ten consolations.
#[derive(Debug, Clone)]
pub struct FourdDraw {
    pub draw_date: &'static str,
    pub draw_no: &'static str,
    pub numbers: [&'static str; 23],
}

/// A single prize occurrence flattened out of a draw.
#[derive(Debug, Clone)]
pub struct FourdRecord {
    pub draw_date: &'static str,
    pub draw_no: &'static str,
    pub prize_code: PrizeCode,
    pub number: &'static str,
}

#[derive(Debug, Clone)]
pub struct TotoFrequencyRow {
    pub ball: u8,
    pub main_freq: u32,
    pub additional_freq: u32,
}

#[derive(Debug, Clone)]
pub struct TotoDraw {
    pub draw_no: &'static str,
    pub draw_date: &'static str,
    pub winning: [u8; 6],
    pub additional: u8,
}

#[derive(Debug, Clone)]
pub struct LegacyDraw {
    pub date: &'static str,
    pub numbers: [u8; 6],
}

/// A selected value with the probability it carried in the sampling pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    pub value: String,
    pub probability: f64,
}

/// Digit distribution for one position; `digits[d]` is P(digit = d).
#[derive(Debug, Clone, Serialize)]
pub struct PositionProbability {
    pub position: usize,
    pub digits: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FourdPrediction {
    pub picks: Vec<Pick>,
    pub position_probabilities: Vec<PositionProbability>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProbabilityTag {
    Hot,
    Cold,
    Normal,
}

impl std::fmt::Display for ProbabilityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbabilityTag::Hot => write!(f, "HOT"),
            ProbabilityTag::Cold => write!(f, "COLD"),
            ProbabilityTag::Normal => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BallProbability {
    pub ball: u8,
    pub probability: f64,
    pub tag: ProbabilityTag,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotoSet {
    pub numbers: [u8; 6],
    pub additional: u8,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotoPrediction {
    pub sets: Vec<TotoSet>,
    pub ball_probabilities: Vec<BallProbability>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairPrediction {
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub unique_values: usize,
    pub date_from: String,
    pub date_to: String,
}

/// True when `dist` has the expected size, no negative entry, and sums to 1.
pub fn validate_distribution(dist: &[f64], size: usize) -> bool {
    if dist.len() != size {
        return false;
    }
    if dist.iter().any(|&p| p < 0.0) {
        return false;
    }
    let sum: f64 = dist.iter().sum();
    (sum - 1.0).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_weights_ordered() {
        let weights = [
            PrizeCode::First.weight(),
            PrizeCode::Second.weight(),
            PrizeCode::Third.weight(),
            PrizeCode::Starter.weight(),
            PrizeCode::Consolation.weight(),
        ];
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_validate_distribution_valid() {
        let dist = vec![1.0 / 49.0; 49];
        assert!(validate_distribution(&dist, 49));
    }

    #[test]
    fn test_validate_distribution_wrong_size() {
        let dist = vec![1.0 / 49.0; 48];
        assert!(!validate_distribution(&dist, 49));
    }

    #[test]
    fn test_validate_distribution_negative() {
        let mut dist = vec![1.0 / 49.0; 49];
        dist[0] = -0.1;
        assert!(!validate_distribution(&dist, 49));
    }
}
