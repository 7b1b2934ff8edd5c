use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;

use crate::ValidationResult;

/// Valid state/place codes from the national registration department
/// numbering scheme. Exhaustive; anything else is rejected.
pub const STATE_CODES: [&str; 43] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "21", "22", "23", "24", "71", "72", "73", "74", "75", "76", "77", "78", "79", "82", "83", "84",
    "85", "86", "87", "88", "89", "90", "91", "92", "93", "98", "99",
];

const BIRTH_RANGE_START: (i32, u32, u32) = (1950, 1, 1);
const BIRTH_RANGE_END: (i32, u32, u32) = (2024, 12, 31);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Any,
    Male,
    Female,
}

fn normalize_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Day-of-month plausibility only. The year is pinned to 2000+YY so the
/// check stays deterministic; this is not birth-year resolution.
fn is_plausible_yymmdd(date_part: &str) -> bool {
    let yy: i32 = date_part[0..2].parse().unwrap_or(0);
    let mm: u32 = date_part[2..4].parse().unwrap_or(0);
    let dd: u32 = date_part[4..6].parse().unwrap_or(0);
    if !(1..=12).contains(&mm) || dd < 1 {
        return false;
    }
    NaiveDate::from_ymd_opt(2000 + yy, mm, dd).is_some()
}

pub fn validate(raw: &str) -> ValidationResult {
    let compact = normalize_digits(raw);
    let normalized = if compact.len() == 12 {
        format!("{}-{}-{}", &compact[0..6], &compact[6..8], &compact[8..])
    } else {
        raw.trim().to_string()
    };

    if compact.len() != 12 {
        return ValidationResult::invalid(
            normalized,
            "Expected 12 digits (optionally as YYMMDD-PB-####).",
        );
    }
    if !is_plausible_yymmdd(&compact[0..6]) {
        return ValidationResult::invalid(normalized, "Invalid birth date section (YYMMDD).");
    }
    let state_code = &compact[6..8];
    if !STATE_CODES.contains(&state_code) {
        return ValidationResult::invalid(normalized, "Invalid state/place code.");
    }
    ValidationResult::ok(normalized)
}

fn random_birth_date(rng: &mut StdRng) -> String {
    let (y, m, d) = BIRTH_RANGE_START;
    let start = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let (y, m, d) = BIRTH_RANGE_END;
    let end = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let span = (end - start).num_days().max(0) as u64;
    let date = start + Days::new(rng.random_range(0..=span));
    date.format("%y%m%d").to_string()
}

/// Random plausible identifier, hyphen-formatted. The final serial digit
/// encodes gender: odd for male, even for female.
pub fn generate(gender: Gender, rng: &mut StdRng) -> String {
    let yymmdd = random_birth_date(rng);
    let state_code = STATE_CODES[rng.random_range(0..STATE_CODES.len())];
    let serial = rng.random_range(0..1000u32);

    let mut last_digit = rng.random_range(0..10u32);
    match gender {
        Gender::Male if last_digit % 2 == 0 => {
            last_digit = if last_digit == 0 { 1 } else { last_digit - 1 };
        }
        Gender::Female if last_digit % 2 == 1 => {
            last_digit = if last_digit == 9 { 8 } else { last_digit + 1 };
        }
        _ => {}
    }

    format!("{yymmdd}-{state_code}-{serial:03}{last_digit}")
}
