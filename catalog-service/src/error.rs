use error_common::{codes, Categorized, ErrorCategory};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl Categorized for CatalogError {
    fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::MedicineNotFound(_) => ErrorCategory::NotFound,
            CatalogError::UnknownCategory(_) => ErrorCategory::Validation,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            CatalogError::MedicineNotFound(_) => codes::catalog::MEDICINE_NOT_FOUND,
            CatalogError::UnknownCategory(_) => codes::catalog::UNKNOWN_CATEGORY,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
