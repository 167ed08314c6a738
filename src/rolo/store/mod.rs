//! # Storage Layer
//!
//! The [`Storage`] trait abstracts the persistence backend so that the
//! logic core can keep a registry of targets and save them in lockstep:
//!
//! - [`fs::FileStore`]: production JSON file storage. One pretty-printed
//!   document holding the whole address book, rewritten on every save.
//! - [`memory::InMemoryStore`]: in-memory storage for tests. Shares its
//!   saved state with the test through a handle, so a test can observe
//!   every snapshot the logic persists.
//!
//! Saves are whole-collection overwrites; there is no incremental path.

use crate::error::Result;
use crate::model::AddressBook;
use std::path::Path;

pub mod fs;
pub mod memory;

/// A persistence target for the address book.
pub trait Storage {
    /// Load the full collection. A backing file that does not exist yet
    /// loads as an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Overwrite the backing store with the full collection.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// The path this target persists to.
    fn path(&self) -> &Path;
}
