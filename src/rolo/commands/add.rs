use crate::commands::{CommandResult, NewContact};
use crate::model::{
    is_valid_address, is_valid_email, is_valid_name, is_valid_phone, is_valid_tag, AddressBook,
    Contact, Detail, Tag,
};

pub const USAGE: &str =
    "add: Adds a contact to the address book. Private fields take a 'p' before the prefix.\n\
     \tParameters: n/NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
     \tExample: add n/John Doe p/98765432 e/johnd@gmail.com a/311 Clementi Ave 2 t/friend";

pub const MESSAGE_DUPLICATE: &str = "This contact already exists in the address book";

pub fn run(book: &mut AddressBook, new: &NewContact) -> CommandResult {
    if let Some(message) = validation_error(new) {
        return CommandResult::message(message);
    }
    if book.contains_name(&new.name) {
        return CommandResult::message(MESSAGE_DUPLICATE);
    }

    let phone = detail(&new.phone, new.phone_private);
    let email = detail(&new.email, new.email_private);
    let address = detail(&new.address, new.address_private);
    let tags = new.tags.iter().cloned().map(Tag).collect();
    let contact = Contact::new(new.name.clone(), phone, email, address, tags);

    let message = format!("New contact added: {}", contact.to_line_hide_private());
    book.add(contact);
    CommandResult::message(message)
}

fn detail(value: &str, private: bool) -> Detail {
    if private {
        Detail::private(value)
    } else {
        Detail::public(value)
    }
}

fn validation_error(new: &NewContact) -> Option<String> {
    if !is_valid_name(&new.name) {
        return Some("Contact names should be spaces or alphanumeric characters".into());
    }
    if !is_valid_phone(&new.phone) {
        return Some("Contact phone numbers should only contain numbers".into());
    }
    if !is_valid_email(&new.email) {
        return Some("Contact emails should be two alphanumeric strings separated by '@'".into());
    }
    if !is_valid_address(&new.address) {
        return Some("Contact addresses can be in any format".into());
    }
    for tag in &new.tags {
        if !is_valid_tag(tag) {
            return Some("Tag names should be alphanumeric".into());
        }
    }
    None
}
