//! Free-text command parsing. One line of user input becomes a [`Command`],
//! or a hard [`RoloError::Parse`] carrying a usage hint. Parsing checks
//! shape only; field validation happens at execution so that a well-formed
//! `add` with a bad phone number is a soft failure, not a parse error.

use crate::commands::{self, help_text, Command, NewContact};
use crate::error::{Result, RoloError};

/// Argument prefixes for `add`, longest first so `pp/` wins over `p/`.
/// The leading `p` marks the field private.
const ADD_PREFIXES: &[&str] = &["pp/", "pe/", "pa/", "n/", "p/", "e/", "a/", "t/"];

pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "add" => parse_add(args),
        "delete" => parse_index(args, commands::delete::USAGE).map(Command::Delete),
        "view" => parse_index(args, commands::view::USAGE).map(Command::View),
        "viewall" => parse_index(args, commands::view::USAGE_ALL).map(Command::ViewAll),
        "find" => parse_find(args),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(RoloError::Parse(format!(
            "Unknown command: '{}'\n{}",
            trimmed,
            help_text()
        ))),
    }
}

fn parse_add(args: &str) -> Result<Command> {
    let mut name = None;
    let mut phone = None;
    let mut email = None;
    let mut address = None;
    let mut tags = Vec::new();

    // Each prefixed token opens a field; unprefixed tokens extend the open
    // field's value (names and addresses may span several words).
    let mut open: Option<(&str, String)> = None;
    for token in args.split_whitespace() {
        match split_prefix(token) {
            Some((prefix, rest)) => {
                if let Some(field) = open.take() {
                    store_field(field, &mut name, &mut phone, &mut email, &mut address, &mut tags)?;
                }
                open = Some((prefix, rest.to_string()));
            }
            None => match open.as_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(token);
                }
                None => return Err(malformed_add(args)),
            },
        }
    }
    if let Some(field) = open.take() {
        store_field(field, &mut name, &mut phone, &mut email, &mut address, &mut tags)?;
    }

    let (Some(name), Some(phone), Some(email), Some(address)) = (name, phone, email, address)
    else {
        return Err(malformed_add(args));
    };

    Ok(Command::Add(Box::new(NewContact {
        name,
        phone: phone.0,
        phone_private: phone.1,
        email: email.0,
        email_private: email.1,
        address: address.0,
        address_private: address.1,
        tags,
    })))
}

fn split_prefix(token: &str) -> Option<(&'static str, &str)> {
    ADD_PREFIXES
        .iter()
        .find_map(|p| token.strip_prefix(p).map(|rest| (*p, rest)))
}

type OptField = Option<(String, bool)>;

fn store_field(
    (prefix, value): (&str, String),
    name: &mut Option<String>,
    phone: &mut OptField,
    email: &mut OptField,
    address: &mut OptField,
    tags: &mut Vec<String>,
) -> Result<()> {
    let slot = match prefix {
        "n/" => {
            if name.replace(value).is_some() {
                return Err(malformed_add("duplicate n/"));
            }
            return Ok(());
        }
        "t/" => {
            tags.push(value);
            return Ok(());
        }
        "p/" | "pp/" => phone,
        "e/" | "pe/" => email,
        "a/" | "pa/" => address,
        _ => unreachable!("unhandled add prefix {prefix}"),
    };
    let private = prefix.len() == 3;
    if slot.replace((value, private)).is_some() {
        return Err(malformed_add(&format!("duplicate {prefix}")));
    }
    Ok(())
}

fn malformed_add(detail: &str) -> RoloError {
    RoloError::Parse(format!(
        "Invalid command format: add ({})\n{}",
        detail,
        commands::add::USAGE
    ))
}

fn parse_index(args: &str, usage: &str) -> Result<usize> {
    let mut tokens = args.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.parse().map_err(|_| {
            RoloError::Parse(format!("Invalid index: '{}'\n{}", token, usage))
        }),
        _ => Err(RoloError::Parse(format!(
            "Invalid command format\n{}",
            usage
        ))),
    }
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(RoloError::Parse(format!(
            "Invalid command format\n{}",
            commands::find::USAGE
        )));
    }
    Ok(Command::Find(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_multiword_fields_and_tags() {
        let cmd =
            parse_command("add n/John Doe p/98765432 e/j@x.com a/311 Clementi Ave 2 t/friend t/owesMoney")
                .unwrap();
        let Command::Add(new) = cmd else {
            panic!("expected add, got {:?}", cmd)
        };
        assert_eq!(new.name, "John Doe");
        assert_eq!(new.phone, "98765432");
        assert_eq!(new.address, "311 Clementi Ave 2");
        assert_eq!(new.tags, vec!["friend", "owesMoney"]);
        assert!(!new.phone_private);
    }

    #[test]
    fn parses_private_field_prefixes() {
        let cmd = parse_command("add n/John pp/999 e/j@x.com pa/Hidden Lane").unwrap();
        let Command::Add(new) = cmd else {
            panic!("expected add")
        };
        assert!(new.phone_private);
        assert!(!new.email_private);
        assert!(new.address_private);
        assert_eq!(new.address, "Hidden Lane");
    }

    #[test]
    fn add_missing_field_is_parse_error() {
        let err = parse_command("add n/John p/999").unwrap_err();
        assert!(matches!(err, RoloError::Parse(_)));
        assert!(err.to_string().contains("add:"));
    }

    #[test]
    fn add_duplicate_field_is_parse_error() {
        let err = parse_command("add n/John p/1 p/2 e/j@x.com a/X").unwrap_err();
        assert!(err.to_string().contains("duplicate p/"));
    }

    #[test]
    fn parses_index_commands() {
        assert_eq!(parse_command("delete 2").unwrap(), Command::Delete(2));
        assert_eq!(parse_command("view 1").unwrap(), Command::View(1));
        assert_eq!(parse_command("viewall 3").unwrap(), Command::ViewAll(3));
    }

    #[test]
    fn bad_index_is_parse_error() {
        for line in ["delete", "delete two", "delete 1 2"] {
            assert!(matches!(
                parse_command(line),
                Err(RoloError::Parse(_))
            ));
        }
    }

    #[test]
    fn parses_find_keywords() {
        assert_eq!(
            parse_command("find alice bob").unwrap(),
            Command::Find(vec!["alice".to_string(), "bob".to_string()])
        );
        assert!(parse_command("find").is_err());
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("list").unwrap(), Command::List);
        assert_eq!(parse_command("clear").unwrap(), Command::Clear);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command(" exit ").unwrap(), Command::Exit);
    }

    #[test]
    fn unknown_word_is_parse_error_with_help() {
        let err = parse_command("frobnicate").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Unknown command"));
        assert!(text.contains("add:"));
    }
}
