use error_common::{codes, Categorized, ErrorCategory};
use thiserror::Error;

/// Symptom form validation failures. Messages are shown inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisError {
    #[error("Please select at least one body part")]
    NoBodyPart,

    #[error("Please select at least one symptom")]
    NoSymptom,

    #[error("Please select symptom duration")]
    MissingDuration,

    #[error("Please select symptom severity")]
    MissingSeverity,

    #[error("Unknown {field}: {value}")]
    UnknownOption { field: &'static str, value: String },
}

impl Categorized for DiagnosisError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    fn code(&self) -> &'static str {
        match self {
            DiagnosisError::UnknownOption { .. } => codes::validation::INVALID_INPUT,
            _ => codes::validation::MISSING_SELECTION,
        }
    }
}

pub type FormResult<T> = Result<T, DiagnosisError>;
