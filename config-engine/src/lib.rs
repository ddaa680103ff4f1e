//! Layered configuration for MediCart
//!
//! Sources are merged in the order they are added, later sources winning:
//!
//! - **Defaults**: compiled-in values matching the storefront's fixed rules
//! - **Files**: YAML or TOML, picked by extension
//! - **Environment**: `MEDICART_` prefixed variables, `__` separating sections
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::{ConfigEngine, ConfigSource};
//!
//! # fn main() -> Result<(), config_engine::ConfigError> {
//! let config = ConfigEngine::new()
//!     .add_source(ConfigSource::file("medicart.yaml"))
//!     .add_source(ConfigSource::env())
//!     .load()?;
//!
//! println!("free delivery above {}", config.pricing.free_delivery_threshold);
//! # Ok(())
//! # }
//! ```
//!
//! `MEDICART_PRICING__DELIVERY_FEE=7.5` overrides `pricing.delivery_fee`.

pub mod settings;
pub mod engine;
pub mod providers;
pub mod validation;
pub mod error;

pub use settings::*;
pub use engine::*;
pub use providers::*;
pub use error::*;
