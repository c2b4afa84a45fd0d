use log::info;

use crate::config::ValidatorConfig;
use crate::models::*;
use crate::utils::{normalize, Clock, SystemClock};
use crate::validation::*;

pub const NAME_REQUIRED_REASON: &str = "name required";
pub const BOOKING_CLOSED_REASON: &str = "reservations are temporarily closed";
pub const UNKNOWN_CAMPUS_REASON: &str = "unknown campus";
pub const UNKNOWN_VISIT_TIME_REASON: &str = "unknown visit time";

/// Runs every check a visitor form needs and collects the failures.
pub struct RegistrationValidator<C: Clock = SystemClock> {
    config: ValidatorConfig,
    documents: DocumentValidator<C>,
    clock: C,
}

impl RegistrationValidator<SystemClock> {
    pub fn new(config: ValidatorConfig) -> Self {
        RegistrationValidator::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> RegistrationValidator<C> {
    pub fn with_clock(config: ValidatorConfig, clock: C) -> Self {
        RegistrationValidator {
            config,
            documents: DocumentValidator::with_clock(clock.clone()),
            clock,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates the sign-in form: phone, identity document, then name.
    pub fn validate_registration(&self, form: &RegistrationForm) -> RegistrationReport {
        // Step 1: Phone number
        let phone_validation = PhoneValidator::validate(&form.phone);

        // Step 2: Identity document
        let document_validation = self
            .documents
            .validate(form.document_type, &form.document_number);

        let mut issues = Vec::new();
        if !phone_validation.is_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Phone,
                message: phone_validation.reason.clone(),
            });
        }
        if !document_validation.is_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Document,
                message: format!("{}: {}", form.document_type, document_validation.reason),
            });
        }

        // Step 3: Name
        if form.name.trim().is_empty() {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Generic,
                message: NAME_REQUIRED_REASON.to_string(),
            });
        }

        let is_valid = issues.is_empty();
        info!(
            "registration form {} with {} issue(s)",
            if is_valid { "accepted" } else { "rejected" },
            issues.len()
        );

        RegistrationReport {
            is_valid,
            phone_validation,
            document_validation,
            normalized_number: normalize(&form.document_number),
            issues,
        }
    }

    /// Validates the reservation form against the site configuration. Whether
    /// the chosen slot still has capacity is left to the caller.
    pub fn validate_reservation(&self, form: &ReservationForm) -> ReservationReport {
        let mut issues = Vec::new();

        if !self.config.booking_open {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Reservation,
                message: BOOKING_CLOSED_REASON.to_string(),
            });
        }

        let date_validation = VisitDateValidator::validate(
            &form.visit_date,
            self.clock.today(),
            &self.config.visit_dates,
        );
        if !date_validation.is_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Date,
                message: date_validation.reason.clone(),
            });
        }

        if !Self::offered(&self.config.campuses, &form.campus) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Reservation,
                message: format!("{}: {:?}", UNKNOWN_CAMPUS_REASON, form.campus.trim()),
            });
        }

        if !Self::offered(&self.config.visit_times, &form.visit_time) {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Reservation,
                message: format!(
                    "{}: {:?}",
                    UNKNOWN_VISIT_TIME_REASON,
                    form.visit_time.trim()
                ),
            });
        }

        let is_valid = issues.is_empty();
        info!(
            "reservation form {} with {} issue(s)",
            if is_valid { "accepted" } else { "rejected" },
            issues.len()
        );

        ReservationReport {
            is_valid,
            date_validation,
            issues,
        }
    }

    fn offered(options: &[String], choice: &str) -> bool {
        let choice = choice.trim();
        options.iter().any(|option| option == choice)
    }
}
