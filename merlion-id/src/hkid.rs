use rand::rngs::StdRng;
use rand::Rng;

use crate::ValidationResult;

/// Share of generated values using a one-letter prefix in `Auto` mode.
const ONE_LETTER_PROB: f64 = 0.65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMode {
    #[default]
    Auto,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckDigitFormat {
    #[default]
    Hyphen,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub prefix_mode: PrefixMode,
    pub check_digit_format: CheckDigitFormat,
}

fn letter_value(c: char) -> u32 {
    // A=10 ... Z=35
    c as u32 - 55
}

/// Check value over the weighted sum mod 11; a one-letter prefix carries an
/// implied leading space worth 36. A result of 10 displays as 'A'.
pub fn check_digit(prefix: &str, digits: &str) -> char {
    let letters: Vec<char> = prefix.chars().collect();
    let mut sum = 0u32;
    if letters.len() == 1 {
        sum += 36 * 9;
        sum += letter_value(letters[0]) * 8;
    } else if letters.len() == 2 {
        sum += letter_value(letters[0]) * 9;
        sum += letter_value(letters[1]) * 8;
    }
    for (i, d) in digits.chars().take(6).enumerate() {
        sum += d.to_digit(10).unwrap_or(0) * (7 - i as u32);
    }
    let check = (11 - sum % 11) % 11;
    if check == 10 {
        'A'
    } else {
        char::from_digit(check, 10).unwrap_or('0')
    }
}

pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

fn parse(normalized: &str) -> Option<(&str, &str, char)> {
    if !normalized.is_ascii() {
        return None;
    }
    let letter_len = normalized
        .bytes()
        .take_while(u8::is_ascii_uppercase)
        .count();
    if !(1..=2).contains(&letter_len) {
        return None;
    }
    let (prefix, rest) = normalized.split_at(letter_len);
    if rest.len() < 7 {
        return None;
    }
    let (digits, tail) = rest.split_at(6);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let check = match tail.as_bytes() {
        [c] => *c,
        [b'-', c] => *c,
        [b'(', c, b')'] => *c,
        _ => return None,
    };
    if !check.is_ascii_digit() && check != b'A' {
        return None;
    }
    Some((prefix, digits, check as char))
}

pub fn validate(raw: &str) -> ValidationResult {
    let normalized = normalize(raw);
    match parse(&normalized) {
        Some((prefix, digits, given)) => {
            let expected = check_digit(prefix, digits);
            if given == expected {
                ValidationResult::ok(normalized)
            } else {
                let reason = format!("Invalid checksum. Expected check digit: {expected}.");
                ValidationResult::invalid(normalized, reason)
            }
        }
        None => ValidationResult::invalid(
            normalized,
            "Expected format: A123456-7, AB123456-7, or A123456(7).",
        ),
    }
}

pub fn generate(options: GenerateOptions, rng: &mut StdRng) -> String {
    let letter_count = match options.prefix_mode {
        PrefixMode::One => 1,
        PrefixMode::Two => 2,
        PrefixMode::Auto => {
            if rng.random::<f64>() < ONE_LETTER_PROB {
                1
            } else {
                2
            }
        }
    };
    let prefix: String = (0..letter_count)
        .map(|_| char::from(b'A' + rng.random_range(0..26u8)))
        .collect();
    let digits = format!("{:06}", rng.random_range(0..1_000_000u32));
    let check = check_digit(&prefix, &digits);
    match options.check_digit_format {
        CheckDigitFormat::Hyphen => format!("{prefix}{digits}-{check}"),
        CheckDigitFormat::Parentheses => format!("{prefix}{digits}({check})"),
    }
}
