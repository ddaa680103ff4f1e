//! Common error handling utilities for MediCart
//!
//! Every crate in the workspace defines its own `thiserror` enum. This crate
//! gives those enums a shared vocabulary so the front-end can decide how to
//! surface a failure without knowing which crate produced it.
//!
//! # Error Categories
//!
//! - **Validation**: a form or checkout precondition failed; shown inline
//! - **NotFound**: a referenced medicine or record does not exist
//! - **Transport**: the (simulated) service call failed; the user is asked to retry
//! - **Storage**: persisted state could not be read or written
//! - **Configuration**: configuration could not be loaded or is invalid
//! - **Internal**: anything else
//!
//! # Example
//!
//! ```rust
//! use error_common::{Categorized, ErrorCategory, ErrorReporter};
//!
//! #[derive(Debug)]
//! struct EmptyCart;
//!
//! impl std::fmt::Display for EmptyCart {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "Your cart is empty")
//!     }
//! }
//!
//! impl std::error::Error for EmptyCart {}
//!
//! impl Categorized for EmptyCart {
//!     fn category(&self) -> ErrorCategory {
//!         ErrorCategory::Validation
//!     }
//!
//!     fn code(&self) -> &'static str {
//!         error_common::codes::validation::EMPTY_CART
//!     }
//! }
//!
//! let message = ErrorReporter::new().report("checkout", &EmptyCart);
//! assert_eq!(message, "Your cart is empty");
//! ```

pub mod types;
pub mod codes;
pub mod reporting;

pub use types::*;
pub use reporting::*;
