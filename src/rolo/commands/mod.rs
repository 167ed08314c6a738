//! The command set: one module per command, dispatched from the [`Command`]
//! enum. Each `run` function takes the state it needs, mutates the address
//! book in place where applicable, and returns a [`CommandResult`].
//!
//! Semantic failures (bad index, validation error, duplicate name) are
//! *soft*: they come back as a normal `CommandResult` carrying an error
//! message, never as `Err`. Only parsing and storage can fail hard, and
//! neither happens in this layer.

use crate::model::{AddressBook, Contact};

pub mod add;
pub mod clear;
pub mod delete;
pub mod find;
pub mod list;
pub mod view;

pub const MESSAGE_INVALID_INDEX: &str = "The contact index provided is invalid";
pub const MESSAGE_CONTACT_NOT_FOUND: &str = "Contact could not be found in address book";
pub const MESSAGE_EXITING: &str = "Exiting address book...";

const HELP_USAGES: &[&str] = &[
    add::USAGE,
    delete::USAGE,
    clear::USAGE,
    find::USAGE,
    list::USAGE,
    view::USAGE,
    view::USAGE_ALL,
    "help: Shows this message.",
    "exit: Exits the program.",
];

/// State injected into a command for execution: the live collection
/// (mutable) and a read-only snapshot of the most recent listing.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub last_shown: &'a [Contact],
}

/// Outcome of one executed command. `contacts` is `Some` exactly when the
/// command produced a listing (list, find); those results replace the
/// last-shown cache. `exit` signals the interactive loop to stop.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub message: String,
    pub contacts: Option<Vec<Contact>>,
    pub exit: bool,
}

impl CommandResult {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = Some(contacts);
        self
    }
}

/// Fields of an `add` command as parsed, before validation. Validation is
/// an execution concern so that a well-formed but invalid `add` is a soft
/// failure, not a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub phone_private: bool,
    pub email: String,
    pub email_private: bool,
    pub address: String,
    pub address_private: bool,
    pub tags: Vec<String>,
}

/// A parsed, executable user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Box<NewContact>),
    Delete(usize),
    Clear,
    Find(Vec<String>),
    List,
    View(usize),
    ViewAll(usize),
    Help,
    Exit,
}

impl Command {
    pub fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match self {
            Command::Add(new) => add::run(ctx.book, new),
            Command::Delete(index) => delete::run(ctx.book, ctx.last_shown, *index),
            Command::Clear => clear::run(ctx.book),
            Command::Find(keywords) => find::run(ctx.book, keywords),
            Command::List => list::run(ctx.book),
            Command::View(index) => view::run(ctx.last_shown, *index, false),
            Command::ViewAll(index) => view::run(ctx.last_shown, *index, true),
            Command::Help => CommandResult::message(help_text()),
            Command::Exit => CommandResult {
                message: MESSAGE_EXITING.to_string(),
                contacts: None,
                exit: true,
            },
        }
    }
}

pub fn help_text() -> String {
    HELP_USAGES.join("\n")
}

/// Resolves a 1-based display index against the last-shown listing.
pub(crate) fn resolve_index(last_shown: &[Contact], index: usize) -> Option<&Contact> {
    index.checked_sub(1).and_then(|i| last_shown.get(i))
}
