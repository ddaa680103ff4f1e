// Error reporting utilities

use crate::types::{Categorized, ErrorCategory};

/// Logs categorized errors and renders the message the user should see
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    /// Overrides the generic retry prompt for non user-facing errors
    retry_message: Option<String>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retry_message(mut self, message: impl Into<String>) -> Self {
        self.retry_message = Some(message.into());
        self
    }

    /// Log `error` under `context` and return the user-facing message
    pub fn report<E: Categorized + ?Sized>(&self, context: &str, error: &E) -> String {
        let category = error.category();
        match category {
            ErrorCategory::Validation | ErrorCategory::NotFound => {
                tracing::warn!(
                    context = context,
                    error_code = error.code(),
                    error_category = %category,
                    "{}",
                    error
                );
            }
            _ => {
                tracing::error!(
                    context = context,
                    error_code = error.code(),
                    error_category = %category,
                    retryable = category.is_retryable(),
                    "{}",
                    error
                );
            }
        }

        match (&self.retry_message, category.is_user_facing()) {
            (Some(message), false) => message.clone(),
            _ => error.user_message(),
        }
    }
}
