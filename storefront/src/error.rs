use catalog_service::CatalogError;
use config_engine::ConfigError;
use diagnosis_service::DiagnosisError;
use error_common::{codes, Categorized, ErrorCategory};
use order_service::OrderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Diagnosis(#[from] DiagnosisError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Pharmacy service unavailable: {0}")]
    Transport(String),

    #[error("Failed to read saved data: {0}")]
    StorageRead(String),

    #[error("Failed to save data: {0}")]
    StorageWrite(String),

    #[error("Corrupt state under key '{key}': {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Categorized for StorefrontError {
    fn category(&self) -> ErrorCategory {
        match self {
            StorefrontError::Order(e) => e.category(),
            StorefrontError::Catalog(e) => e.category(),
            StorefrontError::Diagnosis(e) => e.category(),
            StorefrontError::Config(e) => e.category(),
            StorefrontError::Transport(_) => ErrorCategory::Transport,
            StorefrontError::StorageRead(_)
            | StorefrontError::StorageWrite(_)
            | StorefrontError::CorruptState { .. } => ErrorCategory::Storage,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            StorefrontError::Order(e) => e.code(),
            StorefrontError::Catalog(e) => e.code(),
            StorefrontError::Diagnosis(e) => e.code(),
            StorefrontError::Config(e) => e.code(),
            StorefrontError::Transport(_) => codes::transport::SERVICE_UNAVAILABLE,
            StorefrontError::StorageRead(_) => codes::storage::READ_FAILED,
            StorefrontError::StorageWrite(_) => codes::storage::WRITE_FAILED,
            StorefrontError::CorruptState { .. } => codes::storage::CORRUPT_STATE,
        }
    }
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;
