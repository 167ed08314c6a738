//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic address book library**. The binary is a thin
//! interactive shell around it; the same core could sit behind any other
//! front end that feeds it command lines.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  REPL Layer (args.rs + main.rs)                             │
//! │  - Reads lines, prints results, owns exit codes             │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic (logic.rs)                                           │
//! │  - Owns the book, the storage registry, the last-shown list │
//! │  - Drives parse → execute → persist for each line           │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                      │
//!                    ▼                      ▼
//! ┌──────────────────────────┐  ┌───────────────────────────────┐
//! │  Parser + Commands       │  │  Storage Layer (store/)       │
//! │  - parser.rs: line →     │  │  - Abstract Storage trait     │
//! │    Command (or Parse err)│  │  - FileStore (production)     │
//! │  - commands/*: execute,  │  │  - InMemoryStore (testing)    │
//! │    soft failures         │  │                               │
//! └──────────────────────────┘  └───────────────────────────────┘
//! ```
//!
//! ## The last-shown list
//!
//! Index-based commands (`delete 2`, `view 1`) resolve against the most
//! recent listing shown to the user, not against the live book, so a
//! `find`-narrowed listing keeps its numbering until the next `list` or
//! `find` replaces it. Logic holds the only copy and exposes it read-only.
//!
//! ## Error discipline
//!
//! Two hard error paths: unparseable input and storage failures, both
//! propagated as [`error::RoloError`]. Everything a well-formed command can
//! get wrong at runtime (bad index, validation, duplicate name) is a *soft*
//! failure: a normal [`commands::CommandResult`] whose message tells the
//! user what happened, flowing through the persistence step like any
//! success.
//!
//! ## Module Overview
//!
//! - [`logic`]: the execution core and storage registry
//! - [`parser`]: free-text command parsing
//! - [`commands`]: the command set and its results
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Contact`, `AddressBook`, `Tag`)
//! - [`error`]: error types

pub mod commands;
pub mod error;
pub mod logic;
pub mod model;
pub mod parser;
pub mod store;
