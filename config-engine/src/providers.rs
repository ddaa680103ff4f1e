use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "MEDICART_";

/// A configuration source layered by [`crate::ConfigEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// YAML or TOML file; a missing optional file contributes nothing
    File { path: PathBuf, required: bool },
    /// Prefixed environment variables, `__` separating nested keys
    Env { prefix: String },
}

impl ConfigSource {
    pub fn file(path: impl AsRef<Path>) -> Self {
        ConfigSource::File {
            path: path.as_ref().to_path_buf(),
            required: false,
        }
    }

    pub fn required_file(path: impl AsRef<Path>) -> Self {
        ConfigSource::File {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    pub fn env() -> Self {
        ConfigSource::Env {
            prefix: ENV_PREFIX.to_string(),
        }
    }
}

/// File formats understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
}

impl FileFormat {
    /// Anything that is not `.toml` is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
            _ => FileFormat::Yaml,
        }
    }
}
