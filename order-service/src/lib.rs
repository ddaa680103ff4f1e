//! Cart and order handling for the MediCart storefront
//!
//! Provides:
//! - A cart keyed by medicine id with additive merges
//! - Subtotal, delivery fee and total calculation
//! - Checkout into an immutable order record
//! - An append-only order history

pub mod models;
pub mod pricing;
pub mod cart;
pub mod history;
pub mod error;

pub use models::*;
pub use pricing::*;
pub use cart::*;
pub use history::*;
pub use error::*;
