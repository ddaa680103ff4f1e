use error_common::{codes, Categorized, ErrorCategory};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Your cart is empty")]
    EmptyCart,

    #[error("Delivery address is required")]
    MissingAddress,

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
}

impl Categorized for OrderError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }

    fn code(&self) -> &'static str {
        match self {
            OrderError::EmptyCart => codes::validation::EMPTY_CART,
            OrderError::MissingAddress => codes::validation::MISSING_ADDRESS,
            OrderError::UnknownPaymentMethod(_) => codes::validation::INVALID_INPUT,
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
