use logger_redacted::LoggerConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration for the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub pricing: PricingConfig,
    pub latency: LatencyConfig,
    pub storage: StorageConfig,
    pub logging: LoggerConfig,
}

/// Delivery fee rule: `delivery_fee` is charged unless the subtotal is
/// strictly above `free_delivery_threshold`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub free_delivery_threshold: Decimal,
    pub delivery_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_delivery_threshold: Decimal::from(50),
            delivery_fee: Decimal::from(5),
        }
    }
}

/// Artificial delays of the simulated pharmacy service, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub fetch_ms: u64,
    pub search_ms: u64,
    pub detail_ms: u64,
    pub diagnosis_ms: u64,
}

impl LatencyConfig {
    /// No artificial delay at all; used by tests
    pub fn none() -> Self {
        Self {
            fetch_ms: 0,
            search_ms: 0,
            detail_ms: 0,
            diagnosis_ms: 0,
        }
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }

    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn detail(&self) -> Duration {
        Duration::from_millis(self.detail_ms)
    }

    pub fn diagnosis(&self) -> Duration {
        Duration::from_millis(self.diagnosis_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            fetch_ms: 800,
            search_ms: 500,
            detail_ms: 300,
            diagnosis_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON document holding the persisted cart, orders and profile
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_file = directories::ProjectDirs::from("dev", "medicart", "medicart")
            .map(|dirs| dirs.data_dir().join("storefront.json"))
            .unwrap_or_else(|| PathBuf::from("medicart-data.json"));
        Self { data_file }
    }
}
