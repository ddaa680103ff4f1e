//! MediCart storefront core
//!
//! Wires the catalog, the diagnosis classifier and the cart into a single
//! application state owned by [`Storefront`]. Calls that the browser front-end
//! made against a remote pharmacy go through the [`PharmacyApi`] trait; the
//! bundled [`MockPharmacyApi`] answers from local data after an artificial delay.

pub mod api;
pub mod app;
pub mod error;
pub mod profile;
pub mod state;
pub mod storage;

pub use api::*;
pub use app::*;
pub use error::*;
pub use profile::*;
pub use state::*;
pub use storage::*;
