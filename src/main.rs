// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::io;
use std::process::ExitCode;

use cairo_version::app;
use cairo_version::args::Args;
use clap::Parser;

fn main() -> ExitCode {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let outcome = app::run();
    if let Err(err) = outcome.report(&mut io::stdout().lock(), &mut io::stderr().lock()) {
        log::error!("failed to write result: {err}");
        return ExitCode::FAILURE;
    }
    outcome.exit_code()
}
