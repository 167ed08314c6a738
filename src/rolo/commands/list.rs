use crate::commands::CommandResult;
use crate::model::AddressBook;

pub const USAGE: &str =
    "list: Displays all contacts in the address book as a numbered list.\n\tExample: list";

pub fn run(book: &AddressBook) -> CommandResult {
    let contacts = book.contacts().to_vec();
    CommandResult::message(listed_message(contacts.len())).with_contacts(contacts)
}

pub(crate) fn listed_message(count: usize) -> String {
    format!("{} contact(s) listed!", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Detail};

    #[test]
    fn lists_all_contacts_in_order() {
        let mut book = AddressBook::new();
        for name in ["Alice", "Bob"] {
            book.add(Contact::new(
                name.to_string(),
                Detail::public("1"),
                Detail::public("a@b.c"),
                Detail::public("X"),
                vec![],
            ));
        }

        let result = run(&book);
        let contacts = result.contacts.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Alice");
        assert_eq!(result.message, "2 contact(s) listed!");
    }

    #[test]
    fn empty_book_lists_empty() {
        let result = run(&AddressBook::new());
        assert_eq!(result.contacts.unwrap().len(), 0);
    }
}
