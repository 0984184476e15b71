//! LaunchPulse CLI - Browse and validate startup ideas from the terminal

mod cards;
mod cli;

use clap::Parser;

fn main() {
    // Parse CLI args first to get logging configuration; the app
    // initializes logging from those flags inside run()
    let cli_args = cli::Cli::parse();

    let mut app = cli::LaunchPulseApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
