use super::Storage;
use crate::error::{Result, RoloError};
use crate::model::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store for the given path. Fails with
    /// [`RoloError::InvalidStoragePath`] when the path cannot name an
    /// address book file: no file name, wrong extension, or an existing
    /// directory. This is the fatal startup check; I/O problems only
    /// surface later, on load/save.
    pub fn new(path: PathBuf) -> Result<Self> {
        let valid = path.file_name().is_some()
            && path.extension().is_some_and(|ext| ext == "json")
            && !path.is_dir();
        if !valid {
            return Err(RoloError::InvalidStoragePath(path));
        }
        Ok(Self { path })
    }
}

impl Storage for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RoloError::Io)?;
        serde_json::from_str(&content).map_err(RoloError::Serialization)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RoloError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(book).map_err(RoloError::Serialization)?;
        fs::write(&self.path, content).map_err(RoloError::Io)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
