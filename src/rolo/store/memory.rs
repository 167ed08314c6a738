use super::Storage;
use crate::error::Result;
use crate::model::AddressBook;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Snapshot state shared between an [`InMemoryStore`] and the test that
/// created it: the last saved book plus a save counter.
#[derive(Debug, Default)]
pub struct Saved {
    pub book: Option<AddressBook>,
    pub save_count: usize,
}

/// In-memory storage for tests. Clones of the handle observe every save,
/// which is what lets logic tests assert "storage reflects memory after
/// every call" without a filesystem.
pub struct InMemoryStore {
    saved: Rc<RefCell<Saved>>,
    path: PathBuf,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            saved: Rc::default(),
            path: PathBuf::from("in-memory.json"),
        }
    }

    pub fn handle(&self) -> Rc<RefCell<Saved>> {
        Rc::clone(&self.saved)
    }

    /// Pre-seeds the store so the next `load` returns `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        store.saved.borrow_mut().book = Some(book);
        store
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.saved.borrow().book.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let mut saved = self.saved.borrow_mut();
        saved.book = Some(book.clone());
        saved.save_count += 1;
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Detail};

    #[test]
    fn with_book_seeds_the_next_load() {
        let mut book = AddressBook::new();
        book.add(Contact::new(
            "Seeded".into(),
            Detail::public("1"),
            Detail::public("a@b.c"),
            Detail::public("X"),
            vec![],
        ));
        let store = InMemoryStore::with_book(book.clone());
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn handle_sees_saves() {
        let mut store = InMemoryStore::new();
        let handle = store.handle();
        assert!(store.load().unwrap().is_empty());

        let mut book = AddressBook::new();
        book.add(Contact::new(
            "John".into(),
            Detail::public("1"),
            Detail::public("a@b.c"),
            Detail::public("X"),
            vec![],
        ));
        store.save(&book).unwrap();

        let saved = handle.borrow();
        assert_eq!(saved.save_count, 1);
        assert_eq!(saved.book.as_ref().unwrap(), &book);
    }
}
