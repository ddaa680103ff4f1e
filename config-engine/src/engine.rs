use crate::error::{ConfigError, Result};
use crate::providers::{ConfigSource, FileFormat};
use crate::settings::StorefrontConfig;
use crate::validation;
use figment::{
    providers::{Env, Format, Serialized, Toml, Yaml},
    Figment,
};

/// Builder that layers configuration sources over the defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigEngine {
    sources: Vec<ConfigSource>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Merged figment, defaults first
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(StorefrontConfig::default()));

        for source in &self.sources {
            figment = match source {
                ConfigSource::File { path, required } => {
                    if !path.exists() {
                        if *required {
                            return Err(ConfigError::SourceNotFound(path.clone()));
                        }
                        tracing::debug!(path = %path.display(), "optional config file not present");
                        continue;
                    }
                    match FileFormat::from_path(path) {
                        FileFormat::Yaml => figment.merge(Yaml::file(path)),
                        FileFormat::Toml => figment.merge(Toml::file(path)),
                    }
                }
                ConfigSource::Env { prefix } => figment.merge(Env::prefixed(prefix).split("__")),
            };
        }

        Ok(figment)
    }

    /// Extract and validate the storefront configuration
    pub fn load(&self) -> Result<StorefrontConfig> {
        let config: StorefrontConfig = self.figment()?.extract()?;
        validation::validate(&config)?;
        tracing::debug!(sources = self.sources.len(), "configuration loaded");
        Ok(config)
    }
}
