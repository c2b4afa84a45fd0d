use log::{debug, trace};

use crate::models::{DocumentType, IdentityCredential, ValidationResult};
use crate::utils::{mask, normalize, Clock, SystemClock};
use crate::validation::format::{FormatValidator, RESIDENT_ID_REASON};
use crate::validation::national_id::validate_national_id;

pub const UNKNOWN_TYPE_REASON: &str = "unknown document type, skipped";

/// Validates identity documents by their declared type.
///
/// The clock only matters for the birth-date bound inside 18-digit numbers.
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator<C: Clock = SystemClock> {
    clock: C,
}

impl DocumentValidator<SystemClock> {
    pub fn new() -> Self {
        DocumentValidator { clock: SystemClock }
    }
}

impl<C: Clock> DocumentValidator<C> {
    pub fn with_clock(clock: C) -> Self {
        DocumentValidator { clock }
    }

    /// Normalises `raw_number` and applies the rule for `document_type`.
    pub fn validate(&self, document_type: DocumentType, raw_number: &str) -> ValidationResult {
        let number = normalize(raw_number);
        trace!("validating {} {}", document_type, mask(&number));

        let result = match document_type {
            DocumentType::NationalId | DocumentType::ResidencePermitHkmt => {
                validate_national_id(&number, &self.clock)
            }
            DocumentType::MainlandTravelPermitHkmo => {
                FormatValidator::mainland_travel_permit_hkmo(&number)
            }
            DocumentType::MainlandTravelPermitTaiwan => {
                FormatValidator::mainland_travel_permit_taiwan(&number)
            }
            DocumentType::ForeignPermanentResidentId => self.permanent_resident_id(&number),
            DocumentType::Passport => FormatValidator::passport(&number),
            // Undeclared kinds are accepted unchecked.
            DocumentType::Other => ValidationResult::pass(UNKNOWN_TYPE_REASON),
        };

        if !result.is_valid {
            debug!(
                "{} {} rejected: {}",
                document_type,
                mask(&number),
                result.reason
            );
        }
        result
    }

    pub fn validate_credential(&self, credential: &IdentityCredential) -> ValidationResult {
        self.validate(credential.document_type, &credential.number)
    }

    // The 2017 card is 18 digits starting with 9 and carries the national ID
    // check digit; the older card has a letter prefix.
    fn permanent_resident_id(&self, number: &str) -> ValidationResult {
        if number.chars().count() == 18 && number.starts_with('9') {
            return validate_national_id(number, &self.clock);
        }
        let legacy = FormatValidator::legacy_permanent_resident_id(number);
        if legacy.is_valid {
            legacy
        } else {
            ValidationResult::fail(RESIDENT_ID_REASON)
        }
    }
}

/// Validates a document number against the local wall clock.
pub fn validate_document(document_type: DocumentType, raw_number: &str) -> ValidationResult {
    DocumentValidator::new().validate(document_type, raw_number)
}

pub fn validate_document_with_clock(
    document_type: DocumentType,
    raw_number: &str,
    clock: &dyn Clock,
) -> ValidationResult {
    DocumentValidator::with_clock(clock).validate(document_type, raw_number)
}
