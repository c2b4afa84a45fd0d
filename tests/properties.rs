use chrono::NaiveDate;
use proptest::prelude::*;

use visitcheck::models::DocumentType;
use visitcheck::normalize;
use visitcheck::utils::FixedClock;
use visitcheck::validation::{check_digit, validate_document_with_clock};

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

/// The 17 leading digits of a number with a real birth date between 1900 and
/// 2023.
fn arb_first17() -> impl Strategy<Value = String> {
    (
        "[0-9]{6}",
        1900u32..2024,
        1u32..=12,
        1u32..=28,
        "[0-9]{3}",
    )
        .prop_map(|(region, year, month, day, seq)| {
            format!("{}{:04}{:02}{:02}{}", region, year, month, day, seq)
        })
}

fn with_check_digit(first17: &str) -> String {
    let check = check_digit(first17).unwrap();
    format!("{}{}", first17, check)
}

#[test]
fn textbook_fixture() {
    let result =
        validate_document_with_clock(DocumentType::NationalId, "11010519491231002X", &clock());
    assert!(result.is_valid);
    assert_eq!(result.reason, "passed");
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn generated_ids_pass(first17 in arb_first17()) {
        let id = with_check_digit(&first17);
        let result = validate_document_with_clock(DocumentType::NationalId, &id, &clock());
        prop_assert!(result.is_valid, "{} -> {}", id, result.reason);
    }

    /// Every weight is non-zero mod 11, so changing one digit always changes
    /// the expected check character.
    #[test]
    fn single_digit_substitution_is_detected(
        first17 in arb_first17(),
        position in prop_oneof![0usize..6, 14usize..17],
        delta in 1u8..10,
    ) {
        let id = with_check_digit(&first17);
        let mut bytes = id.into_bytes();
        bytes[position] = b'0' + (bytes[position] - b'0' + delta) % 10;
        let altered = String::from_utf8(bytes).unwrap();

        let result = validate_document_with_clock(DocumentType::NationalId, &altered, &clock());
        prop_assert!(!result.is_valid);
        prop_assert_eq!(result.reason, "check-digit mismatch");
    }

    #[test]
    fn case_does_not_matter(first17 in arb_first17()) {
        let id = with_check_digit(&first17);
        let lower = id.to_lowercase();
        let upper = validate_document_with_clock(DocumentType::NationalId, &id, &clock());
        prop_assert_eq!(
            validate_document_with_clock(DocumentType::NationalId, &lower, &clock()),
            upper
        );
    }

    #[test]
    fn unknown_type_accepts_anything(s in ".{0,30}") {
        let result = validate_document_with_clock(DocumentType::Other, &s, &clock());
        prop_assert!(result.is_valid);
    }

    #[test]
    fn residence_permit_matches_national_id(first17 in arb_first17()) {
        let id = with_check_digit(&first17);
        prop_assert_eq!(
            validate_document_with_clock(DocumentType::ResidencePermitHkmt, &id, &clock()),
            validate_document_with_clock(DocumentType::NationalId, &id, &clock())
        );
    }
}
