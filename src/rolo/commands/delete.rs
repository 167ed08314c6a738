use crate::commands::{
    resolve_index, CommandResult, MESSAGE_CONTACT_NOT_FOUND, MESSAGE_INVALID_INDEX,
};
use crate::model::{AddressBook, Contact};

pub const USAGE: &str = "delete: Deletes the contact at the given position in the last listing.\n\
                         \tParameters: INDEX\n\
                         \tExample: delete 1";

/// Resolves `index` against the last-shown listing, never against the live
/// book's ordering, then removes the resolved contact from the book by id.
pub fn run(book: &mut AddressBook, last_shown: &[Contact], index: usize) -> CommandResult {
    let Some(target) = resolve_index(last_shown, index) else {
        return CommandResult::message(MESSAGE_INVALID_INDEX);
    };
    match book.remove_by_id(target.id) {
        Some(removed) => CommandResult::message(format!(
            "Deleted contact: {}",
            removed.to_line_hide_private()
        )),
        // Listed earlier but since removed from the book (e.g. a prior
        // delete against the same stale listing).
        None => CommandResult::message(MESSAGE_CONTACT_NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Detail;

    fn contact(name: &str) -> Contact {
        Contact::new(
            name.to_string(),
            Detail::public("123"),
            Detail::public("a@b.c"),
            Detail::public("X"),
            vec![],
        )
    }

    #[test]
    fn deletes_by_last_shown_position_not_book_order() {
        let mut book = AddressBook::new();
        let alice = contact("Alice");
        let bob = contact("Bob");
        book.add(alice.clone());
        book.add(bob.clone());

        // Listing in reverse order: index 1 must resolve to Bob.
        let last_shown = vec![bob.clone(), alice.clone()];
        let result = run(&mut book, &last_shown, 1);

        assert!(result.message.contains("Bob"));
        assert_eq!(book.len(), 1);
        assert_eq!(book.contacts()[0].name, "Alice");
    }

    #[test]
    fn out_of_range_index_is_soft_failure() {
        let mut book = AddressBook::new();
        book.add(contact("Alice"));
        let last_shown = vec![book.contacts()[0].clone()];

        for index in [0, 5] {
            let result = run(&mut book, &last_shown, index);
            assert_eq!(result.message, MESSAGE_INVALID_INDEX);
        }
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn already_removed_contact_is_soft_failure() {
        let mut book = AddressBook::new();
        let alice = contact("Alice");
        book.add(alice.clone());
        let last_shown = vec![alice];

        run(&mut book, &last_shown, 1);
        let result = run(&mut book, &last_shown, 1);
        assert_eq!(result.message, MESSAGE_CONTACT_NOT_FOUND);
    }
}
