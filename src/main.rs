// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use collect_files::{app, cli::Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match app::run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
