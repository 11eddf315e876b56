use crate::errors::AppError;
use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::{fs, sync::Mutex};
use tracing::{debug, error};

pub const MOODS_KEY: &str = "moods";
pub const JOURNAL_KEY: &str = "journalEntries";

/// String-valued key-value capability handed to everything that persists state.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;
    /// Returns whether the key was present.
    async fn delete(&self, key: &str) -> Result<bool, AppError>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        Ok(self.entries.lock().await.remove(key).is_some())
    }
}

/// Keeps the whole map in memory and rewrites the JSON file on every change.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let entries = load_entries(&path).await;
        debug!(path = %path.display(), keys = entries.len(), "opened data file");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut entries = self.entries.lock().await;
        let mut next = entries.clone();
        next.insert(key.to_string(), value);
        persist_entries(&self.path, &next).await?;
        *entries = next;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.remove(key);
        persist_entries(&self.path, &next).await?;
        *entries = next;
        Ok(true)
    }
}

async fn load_entries(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    }
}

async fn persist_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(entries)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// A stored list decoded element by element.
#[derive(Debug)]
pub struct StoredList<T> {
    pub items: Vec<T>,
    /// Elements (or a whole non-list value) that could not be decoded.
    pub unreadable: usize,
}

/// Reads a JSON array stored under `key`, skipping elements that no longer
/// decode. A missing key is an empty list.
pub async fn read_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<StoredList<T>, AppError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(StoredList {
            items: Vec::new(),
            unreadable: 0,
        });
    };

    let values: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(err) => {
            error!(key = %key, "stored value is not a list: {err}");
            return Ok(StoredList {
                items: Vec::new(),
                unreadable: 1,
            });
        }
    };

    let mut items = Vec::with_capacity(values.len());
    let mut unreadable = 0;
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(item) => items.push(item),
            Err(err) => {
                error!(key = %key, index = index, "skipping unreadable stored element: {err}");
                unreadable += 1;
            }
        }
    }
    Ok(StoredList { items, unreadable })
}

/// Like [`read_list`], but refuses to hand out a partial list: rewriting it
/// would drop the elements that failed to decode.
pub async fn read_list_for_update<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, AppError> {
    let list = read_list(store, key).await?;
    if list.unreadable > 0 {
        return Err(AppError::storage(format!(
            "{} stored {key} value(s) could not be read; refusing to overwrite",
            list.unreadable
        )));
    }
    Ok(list.items)
}

pub async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    store.set(key, serde_json::to_string(value)?).await
}
