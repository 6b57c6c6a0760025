//! End-to-end tests for the docid binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn extracts_registration_number_from_dump() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "REGN NO KL-07-AB-1234\nOwner: SURESH KUMAR").unwrap();

    Command::cargo_bin("docid")
        .unwrap()
        .args(["extract", "--doc-type", "registration"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("KL07AB1234"));
}

#[test]
fn reports_not_found_as_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "illegible smudge").unwrap();

    Command::cargo_bin("docid")
        .unwrap()
        .args(["extract", "--json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not_found"));
}

#[test]
fn profiles_lists_both_document_types() {
    Command::cargo_bin("docid")
        .unwrap()
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("driving_license"))
        .stdout(predicate::str::contains("vehicle_registration"));
}
