use crate::commands::CommandResult;
use crate::model::AddressBook;

pub const USAGE: &str = "clear: Clears address book permanently.\n\tExample: clear";

pub fn run(book: &mut AddressBook) -> CommandResult {
    book.clear();
    CommandResult::message("Address book has been cleared!")
}
