use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity document kinds a visitor can declare on the registration form.
///
/// The kind is always declared by the caller, never guessed from the shape of
/// the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    NationalId,
    /// Residence permit for Hong Kong, Macau and Taiwan residents.
    ResidencePermitHkmt,
    /// Home-return permit.
    MainlandTravelPermitHkmo,
    /// Taiwan compatriot permit.
    MainlandTravelPermitTaiwan,
    ForeignPermanentResidentId,
    Passport,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 7] = [
        DocumentType::NationalId,
        DocumentType::ResidencePermitHkmt,
        DocumentType::MainlandTravelPermitHkmo,
        DocumentType::MainlandTravelPermitTaiwan,
        DocumentType::ForeignPermanentResidentId,
        DocumentType::Passport,
        DocumentType::Other,
    ];

    /// Canonical kebab-case name, as accepted by the CLI and JSON inputs.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentType::NationalId => "national-id",
            DocumentType::ResidencePermitHkmt => "residence-permit-hkmt",
            DocumentType::MainlandTravelPermitHkmo => "mainland-travel-permit-hkmo",
            DocumentType::MainlandTravelPermitTaiwan => "mainland-travel-permit-taiwan",
            DocumentType::ForeignPermanentResidentId => "foreign-permanent-resident-id",
            DocumentType::Passport => "passport",
            DocumentType::Other => "other",
        }
    }

    /// Label used on the Chinese-language registration form.
    pub fn form_label(&self) -> Option<&'static str> {
        match self {
            DocumentType::NationalId => Some("身份证"),
            DocumentType::ResidencePermitHkmt => Some("港澳台居民居住证"),
            DocumentType::MainlandTravelPermitHkmo => Some("港澳居民来往内地通行证"),
            DocumentType::MainlandTravelPermitTaiwan => Some("台湾居民来往大陆通行证"),
            DocumentType::ForeignPermanentResidentId => Some("外国人永久居留身份证"),
            DocumentType::Passport => Some("护照"),
            DocumentType::Other => None,
        }
    }

    /// Parses a canonical name or a form label. Unrecognised tags become
    /// `Other` rather than an error.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.matches_tag(tag))
            .unwrap_or(DocumentType::Other)
    }

    fn matches_tag(&self, tag: &str) -> bool {
        self.name().eq_ignore_ascii_case(tag) || self.form_label() == Some(tag)
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl From<&str> for DocumentType {
    fn from(tag: &str) -> Self {
        DocumentType::from_tag(tag)
    }
}

impl From<String> for DocumentType {
    fn from(tag: String) -> Self {
        DocumentType::from_tag(&tag)
    }
}

impl From<DocumentType> for String {
    fn from(kind: DocumentType) -> Self {
        kind.name().to_string()
    }
}

/// Verdict of a single validator: pass/fail plus a human-readable reason.
/// The reason is descriptive only; callers branch on `is_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: String,
}

impl ValidationResult {
    pub fn pass(reason: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: true,
            reason: reason.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let verdict = if self.is_valid { "PASSED" } else { "FAILED" };
        write!(f, "{}: {}", verdict, self.reason)
    }
}

/// A declared document plus the number as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCredential {
    pub document_type: DocumentType,
    pub number: String,
}

/// A requested visit date (still raw) with an explicit "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitDateRequest {
    pub requested_date: String,
    pub current_date: chrono::NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Phone,
    Document,
    Date,
    Reservation,
    Generic,
}

impl ValidationIssueType {
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationIssueType::Phone => "PHONE",
            ValidationIssueType::Document => "DOCUMENT",
            ValidationIssueType::Date => "DATE",
            ValidationIssueType::Reservation => "RESERVATION",
            ValidationIssueType::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.issue_type.tag(), self.message)
    }
}

/// Fields of the visitor sign-in form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub is_valid: bool,
    pub phone_validation: ValidationResult,
    pub document_validation: ValidationResult,
    /// The document number in the form it should be stored under.
    pub normalized_number: String,
    pub issues: Vec<ValidationIssue>,
}

/// Fields of the reservation form that carry rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReservationForm {
    pub visit_date: String,
    pub campus: String,
    pub visit_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationReport {
    pub is_valid: bool,
    pub date_validation: ValidationResult,
    pub issues: Vec<ValidationIssue>,
}
