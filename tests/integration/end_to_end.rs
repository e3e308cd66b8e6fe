// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{FULL_HEADER, Install};

const MISSING: &str = "ERROR: Could not extract cairo version from cairo-version.h in ";

#[test]
fn order_of_definitions_does_not_matter() {
    let install = Install::with_header(
        "#define CAIRO_VERSION_MICRO 12\n\
         int unrelated;\n\
         #define CAIRO_VERSION_MAJOR 1\n\
         // #define CAIRO_VERSION_MINOR 99\n\
         #define CAIRO_VERSION_MINOR 17\n",
    );
    install.command().assert().success().stdout("1.17.12\n");
}

#[test]
fn surrounding_whitespace_is_stripped() {
    let install = Install::with_header(
        "#define CAIRO_VERSION_MAJOR  1 \r\n\
         #define CAIRO_VERSION_MINOR 17\t\r\n\
         #define CAIRO_VERSION_MICRO 12   \r\n",
    );
    install.command().assert().success().stdout("1.17.12\n");
}

#[test]
fn repeated_runs_agree() {
    let install = Install::with_header(FULL_HEADER);
    let first = install.command().assert().success().get_output().stdout.clone();
    let second = install.command().assert().success().get_output().stdout.clone();
    assert_eq!(first, second);
}

#[test]
fn missing_micro_reports_search_directory() {
    let install = Install::with_header("#define CAIRO_VERSION_MAJOR 1\n#define CAIRO_VERSION_MINOR 17\n");
    install
        .command()
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::diff(format!("{MISSING}{}\n", install.root().display())));
}

#[test]
fn empty_header_fails_the_same_way() {
    let install = Install::with_header("");
    install.command().assert().code(255).stdout("").stderr(predicate::str::starts_with(MISSING));
}

#[test]
fn absent_header_fails() {
    let install = Install::new();
    install
        .command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cairo-version.h").and(predicate::str::contains(MISSING).not()));
}

#[test]
fn debug_logging_stays_off_stdout() {
    let install = Install::with_header(FULL_HEADER);
    install
        .command()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("1.17.12\n")
        .stderr(predicate::str::contains("found major"));
}
