// Logging macros that redact the formatted message
#[macro_export]
macro_rules! redacted_info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!("{}", $crate::redact(&format!($($arg)*)))
    };
}
