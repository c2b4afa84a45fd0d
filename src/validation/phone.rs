use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::ValidationResult;
use crate::utils::mask;

pub const PHONE_REQUIRED_REASON: &str = "phone number required";
pub const PHONE_FORMAT_REASON: &str = "enter a valid 11-digit mobile number";
pub const PHONE_OK_REASON: &str = "format correct";

lazy_static! {
    // Mainland mobile numbers: 1, then 3-9, then nine more digits.
    static ref MOBILE_NUMBER: Regex = Regex::new(r"^1[3-9][0-9]{9}$").unwrap();
}

pub struct PhoneValidator;

impl PhoneValidator {
    /// Checks the trimmed input against the mainland mobile number pattern.
    /// No carrier or region lookup is done.
    pub fn validate(raw_phone: &str) -> ValidationResult {
        let phone = raw_phone.trim();
        if phone.is_empty() {
            return ValidationResult::fail(PHONE_REQUIRED_REASON);
        }

        if MOBILE_NUMBER.is_match(phone) {
            ValidationResult::pass(PHONE_OK_REASON)
        } else {
            debug!("phone {} rejected", mask(phone));
            ValidationResult::fail(PHONE_FORMAT_REASON)
        }
    }
}

pub fn validate_phone(raw_phone: &str) -> ValidationResult {
    PhoneValidator::validate(raw_phone)
}
