//! Medicine catalog for the MediCart storefront
//!
//! Provides the fixed reference data the rest of the workspace works with:
//! - The medicine table, built once and never mutated
//! - Case-insensitive substring search over name, description and category
//! - Category browsing as offered by the medicines page

pub mod models;
pub mod data;
pub mod catalog;
pub mod error;

pub use models::*;
pub use catalog::*;
pub use error::*;
