//! Key-value persistence port.
//!
//! The session and preset layers only ever see [`TokenStorage`]; the
//! default backing is one JSON file per key under the XDG config
//! directory. Paths are injectable so tests never touch the real config
//! root.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

const APP_DIR: &str = "tokendeck";

pub type StorageResult<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("storage key is empty or contains a path separator: {0:?}")]
    InvalidKey(String),
    #[error("failed to read storage entry: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write storage entry: {path}")]
    Write { path: PathBuf, source: io::Error },
}

/// Read/write by string key. The core never resolves paths itself; hosts
/// may back this with files, a browser store, or anything else.
pub trait TokenStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// File-backed storage: `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub const fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root at `$XDG_CONFIG_HOME/tokendeck`, falling back to
    /// `$HOME/.config/tokendeck`.
    pub fn with_default_root() -> StorageResult<Self> {
        let (xdg_config_home, home) = config_env_dirs();
        let root = config_root(xdg_config_home.as_deref(), home.as_deref())?.join(APP_DIR);
        Ok(Self::with_root(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl TokenStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(&path, value).map_err(|source| StorageError::Write { path, source })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write { path, source }),
        }
    }
}

/// In-memory storage for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.lock().expect("storage poisoned").get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .lock()
            .expect("storage poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.lock().expect("storage poisoned").remove(key);
        Ok(())
    }
}

fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> StorageResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(StorageError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
