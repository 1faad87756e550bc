//! Showroom - interactive vehicle inventory console

use clap::Parser;
use showroom_cli::cli::Cli;
use showroom_cli::session;

fn main() {
    // No flags or arguments beyond --help/--version; parsing still
    // rejects anything unexpected on argv.
    let _cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = session::run(stdin.lock(), &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
