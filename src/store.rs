//! Durable key-value storage for game state.
//!
//! Persistence is deliberately simple: each key is a small JSON document in
//! a file under the platform data directory. The [`KvStore`] trait is what
//! the game layer is handed, so tests (and any future backend) can swap in
//! a double instead of touching the filesystem.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the file-backed store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No platform data directory could be determined.
    #[error("could not determine a data directory")]
    NoDataDir,

    /// I/O error reading or writing a record.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A string key → JSON text store.
///
/// Reads are infallible from the caller's perspective: a missing or
/// unreadable record is `None` (failures are logged at the implementation).
/// Writes and removals surface their error so callers can decide — the game
/// layer logs and plays on.
pub trait KvStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// File-backed store: one `<key>.json` file per record under a root
/// directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at the default location,
    /// `<platform data dir>/huematch/`.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
            .ok_or(StoreError::NoDataDir)?;
        Ok(Self {
            root: base.join("huematch"),
        })
    }

    /// Open a store rooted at an explicit directory.
    pub fn at(root: PathBuf) -> Self {
        Self { root }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        if !path.exists() {
            log::debug!("no record for {key:?} at {path:?}");
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("failed to read {path:?}: {e}");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
