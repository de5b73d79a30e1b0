use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A persistent string-to-string store
pub(crate) trait KeyValueStore: fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.  The in-memory value is updated even if saving
    /// it fails.
    fn set(&mut self, key: &str, value: String) -> Result<(), SaveError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        (**self).set(key, value)
    }
}

/// A store kept in a JSON object on disk.  Every `set()` rewrites the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Return the default path for the store file
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snakegrid").join("scores.json"))
    }

    /// Create a store backed by `path` without reading anything from it
    pub(crate) fn empty(path: PathBuf) -> FileStore {
        FileStore {
            path,
            entries: BTreeMap::new(),
        }
    }

    /// Read the store at `path`.  A missing file yields an empty store.
    pub(crate) fn load(path: PathBuf) -> Result<FileStore, LoadError> {
        let src = match fs_err::read(&path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileStore::empty(path)),
            Err(e) => return Err(LoadError::read(e)),
        };
        let entries = serde_json::from_slice(&src).map_err(LoadError::deserialize)?;
        Ok(FileStore { path, entries })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string_pretty(&self.entries).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        self.entries.insert(key.to_owned(), value);
        self.save()
    }
}

/// A store that never touches the disk
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore(BTreeMap<String, String>);

impl MemoryStore {
    pub(crate) fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        self.0.insert(key.to_owned(), value);
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize store")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write store file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read store file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize store")]
    Deserialize(#[source] serde_json::Error),
}
