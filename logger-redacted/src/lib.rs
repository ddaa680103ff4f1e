pub mod redactor;
pub mod macros;
pub mod config;
pub mod subscriber;

pub use redactor::*;
pub use config::*;
pub use subscriber::*;

#[doc(hidden)]
pub use tracing as __tracing;

/// Logging for MediCart with automatic PII redaction
///
/// The storefront handles a customer profile (name, email, phone, street
/// address) and checkout details. Anything that may contain those values is
/// passed through [`redact`] before it is logged, either directly or via the
/// `redacted_info!` / `redacted_warn!` macros.
///
/// # Detected Data Types
///
/// - **Email Addresses**: john@example.com → EMAIL[hash] or j***@e***
/// - **Phone Numbers**: 555-123-4567 → PHONE[hash] or (***) ***-****
/// - **Card Numbers**: 4242 4242 4242 4242 → CC[hash] or ****-****-****-****
/// - **Street Addresses**: 123 Main St → ADDRESS[hash] or [ADDRESS]
///
/// # Example
///
/// ```rust
/// use logger_redacted::{init_logging, redact, LoggerConfig};
///
/// init_logging(&LoggerConfig::default()).ok();
///
/// let line = redact("Order for john@example.com to 123 Main St");
/// assert!(!line.contains("john@example.com"));
/// assert!(!line.contains("123 Main St"));
/// ```
pub fn redact(text: &str) -> String {
    if redaction_enabled() {
        redactor::default_redactor().redact(text)
    } else {
        text.to_string()
    }
}
