use error_common::{codes, Categorized, ErrorCategory};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Configuration parsing failed: {0}")]
    ParseError(#[from] figment::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl Categorized for ConfigError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }

    fn code(&self) -> &'static str {
        match self {
            ConfigError::SourceNotFound(_) | ConfigError::ParseError(_) => codes::config::LOAD_FAILED,
            ConfigError::ValidationError(_) => codes::config::INVALID_VALUE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
