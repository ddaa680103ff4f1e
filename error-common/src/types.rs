use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown for any failure the user can only recover from by trying again.
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// Coarse classification of a failure, independent of the crate that raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Transport,
    Storage,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// Whether the error text itself is meant for the user (inline form messages)
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ErrorCategory::Validation | ErrorCategory::NotFound)
    }

    /// Whether re-attempting the same action can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport | ErrorCategory::Storage)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Implemented by every crate-level error enum in the workspace
pub trait Categorized: std::error::Error {
    fn category(&self) -> ErrorCategory;

    fn code(&self) -> &'static str;

    /// Text to show the user. Validation and lookup failures carry their own
    /// message; everything else collapses to a generic retry prompt.
    fn user_message(&self) -> String {
        if self.category().is_user_facing() {
            self.to_string()
        } else {
            RETRY_MESSAGE.to_string()
        }
    }
}
