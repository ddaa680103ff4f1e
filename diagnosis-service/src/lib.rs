//! Symptom checker for the MediCart storefront
//!
//! - `form`: the multi-step symptom form and its inline validation
//! - `rules`: the ordered rule table, first match wins
//! - `classifier`: turns a symptom report into a diagnosis with catalog
//!   recommendations
//!
//! The classifier is a pure function of its input. Validation is the
//! caller's job; an empty report simply falls through to the default rule.

pub mod models;
pub mod form;
pub mod rules;
pub mod classifier;
pub mod error;

pub use models::*;
pub use form::*;
pub use rules::*;
pub use classifier::*;
pub use error::*;
