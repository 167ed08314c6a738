//! The command-execution core: owns the address book, the storage target
//! registry, and the last-shown-list cache, and drives the
//! parse → execute → persist sequence for each incoming line.

use crate::commands::{CommandContext, CommandResult};
use crate::error::{Result, RoloError};
use crate::model::{AddressBook, Contact};
use crate::parser;
use crate::store::fs::{FileStore, DEFAULT_FILE_NAME};
use crate::store::Storage;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Registry slot used for the initial load and path reporting.
pub const PRIMARY_STORAGE_INDEX: usize = 0;

pub struct Logic {
    /// Saved in registration order after every executed command; index 0
    /// is the primary target.
    storages: Vec<Box<dyn Storage>>,
    book: AddressBook,
    /// Contacts most recently listed to the user. Replaced wholesale by
    /// list-producing results, untouched by everything else.
    last_shown: Vec<Contact>,
}

impl Logic {
    /// Normal startup: resolve the storage path (given, or the default
    /// data-dir location), register the file store as the sole primary
    /// target, and load the book from it. An unusable path is fatal.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(default_storage_path);
        let store = FileStore::new(path)?;
        let book = store.load()?;
        Ok(Self::with_storage(Box::new(store), book))
    }

    /// Embedding/test constructor: a pre-built storage target and book,
    /// no path resolution or load.
    pub fn with_storage(storage: Box<dyn Storage>, book: AddressBook) -> Self {
        Self {
            storages: vec![storage],
            book,
            last_shown: Vec::new(),
        }
    }

    /// Registers an additional storage target, kept in lockstep with the
    /// primary from the next executed command on.
    pub fn add_storage(&mut self, storage: Box<dyn Storage>) {
        self.storages.push(storage);
    }

    /// Parses and executes one command line, then persists the book to
    /// every registered target in registration order.
    ///
    /// Parse failures and save failures propagate as errors; a parse
    /// failure touches no state at all. Semantic command failures are
    /// soft: they come back as an `Ok` result carrying an error message,
    /// and the persistence step still runs (a no-op overwrite when
    /// nothing changed). The save loop is abort-and-report: the first
    /// failing target stops the loop, leaving later targets on the
    /// previous snapshot.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult> {
        let command = parser::parse_command(line)?;
        let result = command.execute(CommandContext {
            book: &mut self.book,
            last_shown: &self.last_shown,
        });
        for storage in &mut self.storages {
            storage.save(&self.book)?;
        }
        if let Some(contacts) = &result.contacts {
            self.last_shown = contacts.clone();
        }
        Ok(result)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Read-only view of the most recent listing.
    pub fn last_shown(&self) -> &[Contact] {
        &self.last_shown
    }

    /// Path of the storage target at the given registry index.
    pub fn storage_path(&self, index: usize) -> Result<&Path> {
        self.storages
            .get(index)
            .map(|s| s.path())
            .ok_or(RoloError::StorageIndexOutOfRange(index))
    }
}

fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("com", "rolo", "rolo") {
        Some(dirs) => dirs.data_dir().join(DEFAULT_FILE_NAME),
        None => PathBuf::from(DEFAULT_FILE_NAME),
    }
}
