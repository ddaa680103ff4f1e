use crate::error::{StorefrontError, StorefrontResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Key of the persisted cart lines
pub const CART_KEY: &str = "cart";
/// Key of the persisted order history
pub const ORDERS_KEY: &str = "orders";
/// Key of the persisted user profile
pub const PROFILE_KEY: &str = "profile";

/// String-keyed JSON store, the local-storage analog
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StorefrontResult<Option<Value>>;

    async fn set(&self, key: &str, value: Value) -> StorefrontResult<()>;

    async fn remove(&self, key: &str) -> StorefrontResult<()>;
}

/// Read and decode `key`. Absent keys yield `None`.
pub async fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> StorefrontResult<Option<T>> {
    match store.get(key).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StorefrontError::CorruptState {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

pub async fn save_json<T: Serialize + Sync>(store: &dyn KeyValueStore, key: &str, value: &T) -> StorefrontResult<()> {
    let value = serde_json::to_value(value).map_err(|source| StorefrontError::CorruptState {
        key: key.to_string(),
        source,
    })?;
    store.set(key, value).await
}

/// Volatile store for tests and one-shot sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorefrontResult<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> StorefrontResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// All keys kept in one JSON object on disk.
///
/// The whole document is rewritten on every change through a temporary
/// sibling file. A missing file reads as an empty store; a file that is not
/// valid JSON is renamed to `<file>.corrupt` and also reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> StorefrontResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file not present yet");
                return Ok(Map::new());
            }
            Err(e) => {
                return Err(StorefrontError::StorageRead(format!("{}: {}", self.path.display(), e)));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "data file is not a JSON object, starting empty");
                Ok(Map::new())
            }
            Err(source) => {
                let aside = self.sibling("corrupt");
                warn!(
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    error = %source,
                    "data file is not valid JSON, starting empty"
                );
                if let Err(e) = fs::rename(&self.path, &aside).await {
                    warn!(path = %self.path.display(), error = %e, "could not move unreadable data file aside");
                }
                Ok(Map::new())
            }
        }
    }

    /// `<file>.<suffix>` next to the data file
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }

    async fn write_document(&self, document: &Map<String, Value>) -> StorefrontResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorefrontError::StorageWrite(format!("{}: {}", parent.display(), e)))?;
            }
        }

        let body = serde_json::to_string_pretty(document).map_err(|source| StorefrontError::CorruptState {
            key: self.path.display().to_string(),
            source,
        })?;

        // write beside the target and rename over it so readers never see a partial document
        let staging = self.sibling("tmp");
        fs::write(&staging, body)
            .await
            .map_err(|e| StorefrontError::StorageWrite(format!("{}: {}", staging.display(), e)))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StorefrontError::StorageWrite(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorefrontResult<Option<Value>> {
        let mut document = self.read_document().await?;
        Ok(document.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> StorefrontResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value);
        self.write_document(&document).await
    }

    async fn remove(&self, key: &str) -> StorefrontResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(key).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }
}
