use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{DateRules, ValidationResult, VisitDatePolicy, VisitDateRequest};

pub const MALFORMED_DATE_REASON: &str = "malformed date";
pub const DATE_ACCEPTED_REASON: &str = "visit date accepted";

lazy_static! {
    // chrono on its own also accepts a leading sign and unpadded fields.
    static ref ISO_DATE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

pub struct VisitDateValidator;

impl VisitDateValidator {
    /// Parses `raw_date` as `YYYY-MM-DD` and hands it to `policy`. Which dates
    /// are bookable is entirely the policy's decision.
    pub fn validate(
        raw_date: &str,
        current_date: NaiveDate,
        policy: &dyn VisitDatePolicy,
    ) -> ValidationResult {
        let date = match Self::parse_date(raw_date) {
            Some(date) => date,
            None => {
                debug!(
                    "visit date {:?} rejected: {}",
                    raw_date, MALFORMED_DATE_REASON
                );
                return ValidationResult::fail(MALFORMED_DATE_REASON);
            }
        };

        match policy.check(date, current_date) {
            Ok(()) => ValidationResult::pass(DATE_ACCEPTED_REASON),
            Err(reason) => {
                debug!("visit date {} rejected: {}", date, reason);
                ValidationResult::fail(reason)
            }
        }
    }

    pub fn validate_request(
        request: &VisitDateRequest,
        policy: &dyn VisitDatePolicy,
    ) -> ValidationResult {
        Self::validate(&request.requested_date, request.current_date, policy)
    }

    // Parse a date in the format "YYYY-MM-DD"
    fn parse_date(date_str: &str) -> Option<NaiveDate> {
        let date_str = date_str.trim();
        if !ISO_DATE.is_match(date_str) {
            return None;
        }
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
    }
}

pub fn validate_visit_date(
    raw_date: &str,
    current_date: NaiveDate,
    policy: &dyn VisitDatePolicy,
) -> ValidationResult {
    VisitDateValidator::validate(raw_date, current_date, policy)
}

/// Same as [`validate_visit_date`] under the default no-past-dates rules.
pub fn validate_visit_date_default(raw_date: &str, current_date: NaiveDate) -> ValidationResult {
    VisitDateValidator::validate(raw_date, current_date, &DateRules::default())
}
