//! Veracity CLI binary.

use clap::Parser;
use std::process;
use veracity::cli::{args::VeracityArgs, commands::execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = VeracityArgs::parse();

    // Map verbosity onto the logger unless the environment already decided
    if std::env::var_os("RUST_LOG").is_none() {
        let level = match args.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        };
        unsafe {
            std::env::set_var("RUST_LOG", level);
        }
    }
    pretty_env_logger::init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
