// tests/common/mod.rs
//! Shared fixtures: a temp directory holding a copy of the binary and its header.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

pub const FULL_HEADER: &str = "\
/* This is a generated file. */
#ifndef CAIRO_VERSION_H
#define CAIRO_VERSION_H

#define CAIRO_VERSION_MAJOR 1
#define CAIRO_VERSION_MINOR 17
#define CAIRO_VERSION_MICRO 12

#endif
";

/// A throwaway install: `<root>/cairo-version` plus `<root>/src/cairo-version.h`.
#[derive(Debug)]
pub struct Install {
    dir: tempfile::TempDir,
    exe: PathBuf,
}

impl Install {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join(Path::new(env!("CARGO_BIN_EXE_cairo-version")).file_name().unwrap());
        fs::copy(env!("CARGO_BIN_EXE_cairo-version"), &exe).unwrap();
        Self { dir, exe }
    }

    pub fn with_header(contents: &str) -> Self {
        let install = Self::new();
        install.write_header(contents);
        install
    }

    pub fn write_header(&self, contents: &str) {
        let src = self.dir.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("cairo-version.h"), contents).unwrap();
    }

    /// The directory the binary reports on failure.
    #[allow(dead_code)]
    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
