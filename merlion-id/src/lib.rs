pub mod hkid;
pub mod mykad;
pub mod nric;

use serde::Serialize;

/// Outcome of a validation call. Malformed input and checksum mismatches
/// are reported here with a reason, never surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn ok(normalized: String) -> Self {
        Self {
            valid: true,
            normalized,
            reason: None,
        }
    }

    pub fn invalid(normalized: String, reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            normalized,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jurisdiction {
    Nric,
    Mykad,
    Hkid,
}

pub fn validate(jurisdiction: Jurisdiction, raw: &str) -> ValidationResult {
    match jurisdiction {
        Jurisdiction::Nric => nric::validate(raw),
        Jurisdiction::Mykad => mykad::validate(raw),
        Jurisdiction::Hkid => hkid::validate(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dispatches_per_jurisdiction() {
        assert!(validate(Jurisdiction::Nric, "S1234567D").valid);
        assert!(validate(Jurisdiction::Mykad, "900101-01-5678").valid);
        assert!(validate(Jurisdiction::Hkid, "A123456-3").valid);
    }

    #[test]
    fn test_invalid_result_carries_reason() {
        let result = validate(Jurisdiction::Nric, "garbage");
        assert!(!result.valid);
        assert!(result.reason.is_some());
    }
}
