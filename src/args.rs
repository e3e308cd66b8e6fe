use clap::Parser;

/// Prints `MAJOR.MINOR.MICRO` read from `src/cairo-version.h` next to this executable.
///
/// Takes no arguments: the header location is fixed relative to the executable.
#[derive(Parser, Debug)]
#[command(name = "cairo-version", version = crate::VERSION)]
pub struct Args {}
