use rand::rngs::StdRng;
use rand::Rng;

use crate::ValidationResult;

const WEIGHTS: [u32; 7] = [2, 7, 6, 5, 4, 3, 2];

const SUFFIX_ST: &str = "JZIHGFEDCBA";
const SUFFIX_FG: &str = "XWUTRQPNMLK";
// The M series table diverges from F/G at one position ('J' instead of
// 'M'). Domain constant, kept verbatim.
const SUFFIX_M: &str = "XWUTRQPNJLK";

const MAX_BATCH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    S,
    T,
    F,
    G,
    M,
}

impl Prefix {
    pub const ALL: [Prefix; 5] = [Prefix::S, Prefix::T, Prefix::F, Prefix::G, Prefix::M];

    pub fn as_char(&self) -> char {
        match self {
            Prefix::S => 'S',
            Prefix::T => 'T',
            Prefix::F => 'F',
            Prefix::G => 'G',
            Prefix::M => 'M',
        }
    }

    pub fn from_char(c: char) -> Option<Prefix> {
        match c {
            'S' => Some(Prefix::S),
            'T' => Some(Prefix::T),
            'F' => Some(Prefix::F),
            'G' => Some(Prefix::G),
            'M' => Some(Prefix::M),
            _ => None,
        }
    }

    fn offset(&self) -> u32 {
        match self {
            Prefix::T | Prefix::G => 4,
            Prefix::M => 3,
            Prefix::S | Prefix::F => 0,
        }
    }

    fn suffix_table(&self) -> &'static str {
        match self {
            Prefix::S | Prefix::T => SUFFIX_ST,
            Prefix::F | Prefix::G => SUFFIX_FG,
            Prefix::M => SUFFIX_M,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixSelection {
    #[default]
    Auto,
    Fixed(Prefix),
}

pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Check letter for a prefix and 7-digit payload: weighted digit sum plus
/// the prefix offset, mod 11, looked up in the prefix family's table.
pub fn checksum_for(prefix: Prefix, digits: &str) -> char {
    let sum: u32 = digits
        .chars()
        .zip(WEIGHTS)
        .map(|(d, w)| d.to_digit(10).unwrap_or(0) * w)
        .sum();
    let remainder = ((sum + prefix.offset()) % 11) as usize;
    prefix.suffix_table().as_bytes()[remainder] as char
}

fn parse(normalized: &str) -> Option<(Prefix, &str, char)> {
    if normalized.len() != 9 || !normalized.is_ascii() {
        return None;
    }
    let prefix = Prefix::from_char(normalized.chars().next()?)?;
    let digits = &normalized[1..8];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let suffix = normalized.chars().last()?;
    if !suffix.is_ascii_uppercase() {
        return None;
    }
    Some((prefix, digits, suffix))
}

pub fn validate(raw: &str) -> ValidationResult {
    let normalized = normalize(raw);
    match parse(&normalized) {
        Some((prefix, digits, suffix)) => {
            let expected = checksum_for(prefix, digits);
            if suffix == expected {
                ValidationResult::ok(normalized)
            } else {
                let reason = format!("Invalid checksum. Expected suffix: {expected}.");
                ValidationResult::invalid(normalized, reason)
            }
        }
        None => ValidationResult::invalid(
            normalized,
            "Expected format: prefix + 7 digits + suffix (e.g. S1234567D).",
        ),
    }
}

pub fn generate(selection: PrefixSelection, rng: &mut StdRng) -> String {
    let prefix = match selection {
        PrefixSelection::Fixed(p) => p,
        PrefixSelection::Auto => Prefix::ALL[rng.random_range(0..Prefix::ALL.len())],
    };
    let digits = format!("{:07}", rng.random_range(0..10_000_000u32));
    let suffix = checksum_for(prefix, &digits);
    format!("{}{digits}{suffix}", prefix.as_char())
}

/// Duplicate-free batch; count is clamped to 1..=50.
pub fn generate_batch(count: usize, selection: PrefixSelection, rng: &mut StdRng) -> Vec<String> {
    let size = count.clamp(1, MAX_BATCH);
    let mut values: Vec<String> = Vec::with_capacity(size);
    while values.len() < size {
        let value = generate(selection, rng);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_checksum_known_vectors() {
        assert_eq!(checksum_for(Prefix::S, "1234567"), 'D');
        assert_eq!(checksum_for(Prefix::T, "1234567"), 'J');
        assert_eq!(checksum_for(Prefix::F, "1234567"), 'N');
        assert_eq!(checksum_for(Prefix::G, "1234567"), 'X');
        assert_eq!(checksum_for(Prefix::M, "1234567"), 'K');
        assert_eq!(checksum_for(Prefix::S, "0000001"), 'I');
        assert_eq!(checksum_for(Prefix::T, "0000000"), 'G');
    }

    #[test]
    fn test_m_series_table_diverges_from_fg_at_index_8() {
        // Weighted sum 5 (digit 1 at weight-5 position), offset 3 -> index 8.
        assert_eq!(checksum_for(Prefix::M, "0001000"), 'J');
        // Weighted sum 8, offset 0 -> index 8 in the F/G table.
        assert_eq!(checksum_for(Prefix::F, "0001010"), 'M');
        assert_eq!(checksum_for(Prefix::G, "0000000"), 'R');
    }

    #[test]
    fn test_validate_accepts_known_good() {
        let result = validate("S1234567D");
        assert!(result.valid, "{:?}", result.reason);
        assert_eq!(result.normalized, "S1234567D");
    }

    #[test]
    fn test_validate_normalizes_whitespace_and_case() {
        let result = validate("  s1234567d ");
        assert!(result.valid);
        assert_eq!(result.normalized, "S1234567D");
    }

    #[test]
    fn test_validate_rejects_bad_structure() {
        for raw in ["", "S123456D", "A1234567D", "S12345678", "S123456XD"] {
            let result = validate(raw);
            assert!(!result.valid, "{raw} should be structurally invalid");
            assert!(result
                .reason
                .as_deref()
                .is_some_and(|r| r.contains("Expected format")));
        }
    }

    #[test]
    fn test_validate_reports_expected_suffix() {
        let result = validate("S1234567A");
        assert!(!result.valid);
        assert!(result
            .reason
            .as_deref()
            .is_some_and(|r| r.contains("Expected suffix: D")));
    }

    #[test]
    fn test_generate_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = generate(PrefixSelection::Auto, &mut rng);
            assert!(validate(&value).valid, "generated {value} should validate");
        }
    }

    #[test]
    fn test_generate_honors_fixed_prefix() {
        let mut rng = StdRng::seed_from_u64(7);
        for prefix in Prefix::ALL {
            let value = generate(PrefixSelection::Fixed(prefix), &mut rng);
            assert!(value.starts_with(prefix.as_char()));
            assert!(validate(&value).valid);
        }
    }

    #[test]
    fn test_batch_is_unique_and_clamped() {
        let mut rng = StdRng::seed_from_u64(99);
        let batch = generate_batch(200, PrefixSelection::Auto, &mut rng);
        assert_eq!(batch.len(), 50);
        let mut deduped = batch.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), batch.len());

        let single = generate_batch(0, PrefixSelection::Auto, &mut rng);
        assert_eq!(single.len(), 1);
    }
}
