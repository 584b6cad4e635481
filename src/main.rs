use clap::Parser;
use tick::cli::commands::Cli;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = tick::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
