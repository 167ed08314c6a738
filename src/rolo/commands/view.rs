use crate::commands::{resolve_index, CommandResult, MESSAGE_INVALID_INDEX};
use crate::model::Contact;

pub const USAGE: &str =
    "view: Views the non-private details of the contact at the given position in the last listing.\n\
     \tParameters: INDEX\n\
     \tExample: view 1";

pub const USAGE_ALL: &str =
    "viewall: Views all details of the contact at the given position in the last listing.\n\
     \tParameters: INDEX\n\
     \tExample: viewall 1";

/// Read-only: resolves against the last-shown listing and renders the
/// contact. Never carries a contact list, so the listing cache survives.
pub fn run(last_shown: &[Contact], index: usize, show_private: bool) -> CommandResult {
    let Some(contact) = resolve_index(last_shown, index) else {
        return CommandResult::message(MESSAGE_INVALID_INDEX);
    };
    let line = if show_private {
        contact.to_line_show_all()
    } else {
        contact.to_line_hide_private()
    };
    CommandResult::message(format!("Viewing contact: {}", line))
}
