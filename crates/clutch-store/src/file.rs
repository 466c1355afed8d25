use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreResult;
use crate::keys::validate_key;
use crate::traits::KvStore;

/// File extension of a slot file.
const SLOT_EXTENSION: &str = "json";

/// File-backed key-value store: one file per slot under a root directory.
///
/// On-disk layout:
/// ```text
/// <root>/<key>.json       current slot contents
/// <root>/<key>.json.tmp   in-flight write, renamed over the slot when complete
/// ```
///
/// A write goes to the temporary file first, is synced, and is then renamed
/// over the slot file, so a reader sees either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open (or create) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "file store opened");
        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn slot_path(&self, key: &str) -> StoreResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{SLOT_EXTENSION}")))
    }

    fn temp_path(slot: &Path) -> PathBuf {
        let mut name = slot.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.slot_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let path = self.slot_path(key)?;
        let temp = Self::temp_path(&path);

        let mut file = File::create(&temp)?;
        file.write_all(value)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp, &path)?;

        debug!(key, len = value.len(), "slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "slot removed");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
