pub mod config;
pub mod models;
pub mod registration_validator;
pub mod utils;
pub mod validation;

pub use config::ValidatorConfig;
pub use models::{DocumentType, IdentityCredential, ValidationResult};
pub use registration_validator::RegistrationValidator;
pub use utils::normalize;
pub use validation::{validate_document, validate_phone, validate_visit_date};
