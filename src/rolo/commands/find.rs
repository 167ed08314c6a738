use crate::commands::{list::listed_message, CommandResult};
use crate::model::AddressBook;

pub const USAGE: &str =
    "find: Finds all contacts whose names contain any of the given keywords (case-insensitive).\n\
     \tParameters: KEYWORD [MORE_KEYWORDS]...\n\
     \tExample: find alice bob charlie";

pub fn run(book: &AddressBook, keywords: &[String]) -> CommandResult {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let matches: Vec<_> = book
        .contacts()
        .iter()
        .filter(|contact| {
            contact
                .name
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| word.to_lowercase() == *k))
        })
        .cloned()
        .collect();

    CommandResult::message(listed_message(matches.len())).with_contacts(matches)
}
