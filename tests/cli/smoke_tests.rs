use predicates::prelude::*;

use crate::common::{FULL_HEADER, Install};

#[test]
fn shows_help() {
    Install::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cairo-version.h"));
}

#[test]
fn rejects_arguments() {
    Install::with_header(FULL_HEADER)
        .command()
        .arg("src/cairo-version.h")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn prints_dotted_version() {
    Install::with_header(FULL_HEADER).command().assert().success().stdout("1.17.12\n").stderr("");
}
