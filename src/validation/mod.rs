pub mod document;
pub mod format;
pub mod national_id;
pub mod phone;
pub mod visit_date;

pub use document::{validate_document, validate_document_with_clock, DocumentValidator};
pub use format::FormatValidator;
pub use national_id::{check_digit, validate_national_id};
pub use phone::{validate_phone, PhoneValidator};
pub use visit_date::{validate_visit_date, validate_visit_date_default, VisitDateValidator};
