use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::models::ValidationResult;
use crate::utils::{mask, Clock};

pub const LENGTH_REASON: &str = "length must be 18";
pub const CHARSET_REASON: &str = "invalid characters";
pub const BIRTH_DATE_RANGE_REASON: &str = "invalid birth date";
pub const BIRTH_DATE_FORMAT_REASON: &str = "malformed birth date";
pub const CHECK_DIGIT_REASON: &str = "check-digit mismatch";
pub const PASSED_REASON: &str = "passed";

const ID_LENGTH: usize = 18;
const EARLIEST_BIRTH_YEAR: i32 = 1900;

// ISO 7064 MOD 11-2 as used by GB 11643: position weights for the first 17
// digits and the remainder-to-check-character table.
const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Computes the 18th character for the given 17 leading digits, or `None` if
/// the input is not exactly 17 ASCII digits.
pub fn check_digit(first17: &str) -> Option<char> {
    if first17.len() != WEIGHTS.len() || !first17.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum: u32 = first17
        .bytes()
        .zip(WEIGHTS.iter())
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();

    Some(CHECK_CHARS[(sum % 11) as usize])
}

/// Validates an already-normalised 18-character resident identity number.
///
/// Gates run in order and the first failure is reported: length, character
/// set, embedded birth date (not after `clock.today()`, year 1900 or later),
/// then the check digit.
pub fn validate_national_id(number: &str, clock: &dyn Clock) -> ValidationResult {
    if number.chars().count() != ID_LENGTH {
        debug!("id {} rejected: {}", mask(number), LENGTH_REASON);
        return ValidationResult::fail(LENGTH_REASON);
    }

    let shape_ok = number.chars().enumerate().all(|(i, c)| allowed_at(i, c));
    if !shape_ok {
        debug!("id {} rejected: {}", mask(number), CHARSET_REASON);
        return ValidationResult::fail(CHARSET_REASON);
    }

    match parse_birth_date(&number[6..14]) {
        Some(birth) if birth > clock.today() || birth.year() < EARLIEST_BIRTH_YEAR => {
            debug!(
                "id {} rejected: birth date {} out of range",
                mask(number),
                birth
            );
            return ValidationResult::fail(BIRTH_DATE_RANGE_REASON);
        }
        Some(_) => {}
        None => {
            debug!("id {} rejected: {}", mask(number), BIRTH_DATE_FORMAT_REASON);
            return ValidationResult::fail(BIRTH_DATE_FORMAT_REASON);
        }
    }

    // All ASCII from here on, so byte slicing is safe.
    let (body, last) = number.split_at(ID_LENGTH - 1);
    if check_digit(body) != last.chars().next() {
        debug!("id {} rejected: {}", mask(number), CHECK_DIGIT_REASON);
        return ValidationResult::fail(CHECK_DIGIT_REASON);
    }

    ValidationResult::pass(PASSED_REASON)
}

// Digits throughout, with an `X` allowed as the check character.
fn allowed_at(position: usize, c: char) -> bool {
    c.is_ascii_digit() || (position == ID_LENGTH - 1 && c == 'X')
}

// Parse a date in the format "YYYYMMDD". Year 0000 is not a date.
fn parse_birth_date(digits: &str) -> Option<NaiveDate> {
    let year = digits.get(0..4)?.parse::<i32>().ok().filter(|&y| y > 0)?;
    let month = digits.get(4..6)?.parse::<u32>().ok()?;
    let day = digits.get(6..8)?.parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn textbook_number_has_x_check_digit() {
        assert_eq!(check_digit("11010519491231002"), Some('X'));
        let result = validate_national_id("11010519491231002X", &clock());
        assert_eq!(result, ValidationResult::pass(PASSED_REASON));
    }

    #[test]
    fn numeric_check_digits_pass() {
        let ids = [
            "440304199003074510",
            "310115200002290013",
            "910000198506151238",
        ];
        for id in ids {
            assert!(validate_national_id(id, &clock()).is_valid, "{id}");
        }
    }

    #[test]
    fn check_digit_rejects_bad_input() {
        assert_eq!(check_digit("1101051949123100"), None);
        assert_eq!(check_digit("1101051949123100A"), None);
        assert_eq!(check_digit("110105194912310021"), None);
    }

    #[test]
    fn length_gate() {
        assert_eq!(validate_national_id("123", &clock()).reason, LENGTH_REASON);
        assert_eq!(validate_national_id("", &clock()).reason, LENGTH_REASON);
        assert_eq!(
            validate_national_id("11010519491231002X0", &clock()).reason,
            LENGTH_REASON
        );
    }

    #[test]
    fn charset_gate() {
        assert_eq!(
            validate_national_id("1101051949123100XX", &clock()).reason,
            CHARSET_REASON
        );
        assert_eq!(
            validate_national_id("11010519491231002Y", &clock()).reason,
            CHARSET_REASON
        );
        // Lowercase is the normaliser's job; raw lowercase is rejected here.
        assert_eq!(
            validate_national_id("11010519491231002x", &clock()).reason,
            CHARSET_REASON
        );
        assert_eq!(
            validate_national_id("１1010519491231002X", &clock()).reason,
            CHARSET_REASON
        );
    }

    #[test]
    fn birth_date_gate() {
        // 2099-12-31
        assert_eq!(
            validate_national_id("110105209912310029", &clock()).reason,
            BIRTH_DATE_RANGE_REASON
        );
        // 1899-12-31
        assert_eq!(
            validate_national_id("110105189912310023", &clock()).reason,
            BIRTH_DATE_RANGE_REASON
        );
        // 1949-02-31
        assert_eq!(
            validate_national_id("110105194902310026", &clock()).reason,
            BIRTH_DATE_FORMAT_REASON
        );
        // 0000-01-01
        assert_eq!(
            validate_national_id("110105000001011231", &clock()).reason,
            BIRTH_DATE_FORMAT_REASON
        );
    }

    #[test]
    fn birth_date_today_is_accepted() {
        let first17 = "11010520240601123";
        let id = format!("{}{}", first17, check_digit(first17).unwrap());
        assert!(validate_national_id(&id, &clock()).is_valid);

        let day_before = FixedClock(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
        assert_eq!(
            validate_national_id(&id, &day_before).reason,
            BIRTH_DATE_RANGE_REASON
        );
    }

    #[test]
    fn check_digit_gate() {
        assert_eq!(
            validate_national_id("110105194912310021", &clock()).reason,
            CHECK_DIGIT_REASON
        );
        assert_eq!(
            validate_national_id("110105194912310037", &clock()).reason,
            CHECK_DIGIT_REASON
        );
    }
}
