use clap::Parser;
use colored::*;
use rolo::commands::CommandResult;
use rolo::error::{Result, RoloError};
use rolo::logic::{Logic, PRIMARY_STORAGE_INDEX};
use std::io::{self, BufRead, Write};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut logic = Logic::new(cli.file)?;

    println!("Welcome to Rolo, your command-line address book.");
    println!(
        "Using storage file: {}",
        logic.storage_path(PRIMARY_STORAGE_INDEX)?.display()
    );
    println!("Type 'help' for a list of commands.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(RoloError::Io)?;

        line.clear();
        if stdin.lock().read_line(&mut line).map_err(RoloError::Io)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match logic.execute(trimmed) {
            Ok(result) => {
                print_result(&result);
                if result.exit {
                    break;
                }
            }
            // Bad input is the user's to fix; storage failures are fatal.
            Err(e @ RoloError::Parse(_)) => println!("{}", e.to_string().red()),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn print_result(result: &CommandResult) {
    if let Some(contacts) = &result.contacts {
        for (i, contact) in contacts.iter().enumerate() {
            println!(
                "{} {}",
                format!("{}.", i + 1).dimmed(),
                contact.to_line_hide_private()
            );
        }
    }
    println!("{}", result.message.green());
}
