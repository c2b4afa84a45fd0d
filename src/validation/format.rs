use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ValidationResult;

pub const FORMAT_OK_REASON: &str = "format correct";
pub const HKMO_PERMIT_REASON: &str = "must be H/M followed by 8 or 10 digits";
pub const TAIWAN_PERMIT_REASON: &str = "must be 8 digits";
pub const RESIDENT_ID_REASON: &str = "invalid format";
pub const PASSPORT_REASON: &str = "passport number format invalid";

lazy_static! {
    // Home-return permit: H (Hong Kong) or M (Macau), then 8 to 10 digits.
    static ref HKMO_PERMIT: Regex = Regex::new(r"^[HM][0-9]{8,10}$").unwrap();
    static ref TAIWAN_PERMIT: Regex = Regex::new(r"^[0-9]{8}$").unwrap();
    // Pre-2017 permanent residence card: three-letter country code plus 12 digits.
    static ref LEGACY_RESIDENT_ID: Regex = Regex::new(r"^[A-Z]{3}[0-9]{12}$").unwrap();
    // Issuers differ too much for anything stricter.
    static ref PASSPORT: Regex = Regex::new(r"^[A-Z0-9]{5,20}$").unwrap();
}

/// Format-only predicates for documents without a check digit. Inputs are
/// expected to be normalised already.
pub struct FormatValidator;

impl FormatValidator {
    pub fn mainland_travel_permit_hkmo(number: &str) -> ValidationResult {
        Self::matching(&HKMO_PERMIT, number, HKMO_PERMIT_REASON)
    }

    pub fn mainland_travel_permit_taiwan(number: &str) -> ValidationResult {
        Self::matching(&TAIWAN_PERMIT, number, TAIWAN_PERMIT_REASON)
    }

    /// The 15-character legacy card. The 18-digit card is checked as a
    /// national ID by the dispatcher before this is reached.
    pub fn legacy_permanent_resident_id(number: &str) -> ValidationResult {
        Self::matching(&LEGACY_RESIDENT_ID, number, RESIDENT_ID_REASON)
    }

    pub fn passport(number: &str) -> ValidationResult {
        Self::matching(&PASSPORT, number, PASSPORT_REASON)
    }

    fn matching(pattern: &Regex, number: &str, failure: &str) -> ValidationResult {
        if pattern.is_match(number) {
            ValidationResult::pass(FORMAT_OK_REASON)
        } else {
            ValidationResult::fail(failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hkmo_permit() {
        let hkmo = FormatValidator::mainland_travel_permit_hkmo;
        assert!(hkmo("H12345678").is_valid);
        assert!(hkmo("M1234567890").is_valid);
        assert!(hkmo("H123456789").is_valid);

        let rejected = hkmo("X12345678");
        assert_eq!(rejected, ValidationResult::fail(HKMO_PERMIT_REASON));
        assert!(!hkmo("H1234567").is_valid);
        assert!(!hkmo("H12345678901").is_valid);
    }

    #[test]
    fn taiwan_permit() {
        let taiwan = FormatValidator::mainland_travel_permit_taiwan;
        assert!(taiwan("12345678").is_valid);
        assert_eq!(
            taiwan("1234567"),
            ValidationResult::fail(TAIWAN_PERMIT_REASON)
        );
        assert!(!taiwan("T1234567").is_valid);
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let arabic_indic = "١٢٣٤٥٦٧٨";
        let result = FormatValidator::mainland_travel_permit_taiwan(arabic_indic);
        assert!(!result.is_valid);
    }

    #[test]
    fn legacy_resident_id() {
        let legacy = FormatValidator::legacy_permanent_resident_id;
        assert!(legacy("USA110012345678").is_valid);
        assert_eq!(
            legacy("US1100123456789"),
            ValidationResult::fail(RESIDENT_ID_REASON)
        );
    }

    #[test]
    fn passport() {
        assert!(FormatValidator::passport("E12345678").is_valid);
        assert!(FormatValidator::passport("AB123").is_valid);
        assert_eq!(
            FormatValidator::passport("E123"),
            ValidationResult::fail(PASSPORT_REASON)
        );
        assert!(!FormatValidator::passport("E1234-5678").is_valid);
        let too_long = "A123456789012345678901";
        assert!(!FormatValidator::passport(too_long).is_valid);
    }
}
