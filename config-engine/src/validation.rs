use crate::error::{ConfigError, Result};
use crate::settings::StorefrontConfig;
use rust_decimal::Decimal;

pub fn validate(config: &StorefrontConfig) -> Result<()> {
    if config.pricing.free_delivery_threshold < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "pricing.free_delivery_threshold must not be negative".to_string(),
        ));
    }

    if config.pricing.delivery_fee < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "pricing.delivery_fee must not be negative".to_string(),
        ));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError("logging.level must not be empty".to_string()));
    }

    if config.storage.data_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError("storage.data_file must not be empty".to_string()));
    }

    Ok(())
}
