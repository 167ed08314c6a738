use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn full_session_add_find_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("book.json");

    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg(&book_path)
        .write_stdin(
            "add n/John Doe p/98765432 e/j@x.com a/311 Clementi Ave 2 t/friend\n\
             list\n\
             find John\n\
             delete 1\n\
             list\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicates::str::contains("Using storage file:"))
        .stdout(predicates::str::contains("New contact added: John Doe"))
        .stdout(predicates::str::contains("1 contact(s) listed!"))
        .stdout(predicates::str::contains("Deleted contact: John Doe"))
        .stdout(predicates::str::contains("0 contact(s) listed!"))
        .stdout(predicates::str::contains("Exiting address book..."));

    // The final save reflects the emptied book.
    let saved = std::fs::read_to_string(&book_path).unwrap();
    assert!(!saved.contains("John Doe"));
}

#[test]
fn contacts_survive_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("book.json");

    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg(&book_path)
        .write_stdin("add n/Jane p/123 e/jane@x.com a/Elsewhere\nexit\n")
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg(&book_path)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Jane"))
        .stdout(predicates::str::contains("1 contact(s) listed!"));
}

#[test]
fn unknown_command_keeps_the_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let book_path = temp_dir.path().join("book.json");

    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg(&book_path)
        .write_stdin("frobnicate\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown command"))
        .stdout(predicates::str::contains("0 contact(s) listed!"));
}

#[test]
fn invalid_storage_path_is_fatal() {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.arg("not-a-json-file")
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid storage file path"));
}
