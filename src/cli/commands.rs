use clap::Parser;

/// Running `tick` with no arguments launches the interactive list; there
/// are no subcommands. clap still provides --help and --version.
#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a tiny terminal todo list"), version)]
pub struct Cli {}
