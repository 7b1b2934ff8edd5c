pub mod data;
pub mod fourd;
pub mod models;
pub mod pairs;
pub mod sampler;
pub mod toto;

use anyhow::Result;
use serde::Serialize;

use crate::models::{FourdPrediction, PairPrediction, TotoPrediction};
use crate::sampler::{date_seed, DEFAULT_RANDOMNESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Fourd,
    Toto,
    Pairs,
}

/// Caller knobs shared by every domain. A missing seed falls back to the
/// date-derived default at this outermost entry point only; the inner
/// engines always receive an explicit seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredictionOptions {
    pub seed: Option<u64>,
    pub randomness: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Fourd(FourdPrediction),
    Toto(TotoPrediction),
    Pairs(PairPrediction),
}

pub fn predict(domain: Domain, count: usize, options: PredictionOptions) -> Result<Prediction> {
    let seed = options.seed.unwrap_or_else(date_seed);
    let randomness = options.randomness.unwrap_or(DEFAULT_RANDOMNESS);
    match domain {
        Domain::Fourd => Ok(Prediction::Fourd(fourd::predict(count, seed, randomness)?)),
        Domain::Toto => Ok(Prediction::Toto(toto::predict(count, seed, randomness)?)),
        Domain::Pairs => Ok(Prediction::Pairs(pairs::predict(count, seed, randomness)?)),
    }
}
