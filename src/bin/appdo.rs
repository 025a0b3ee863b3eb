// src/bin/appdo.rs

use appdo::{
    cli::{self, Cli},
    core::paths,
    system::{
        home::UserDbHomeResolver,
        launcher::{ExecLauncher, LaunchError},
    },
};
use clap::Parser;
use colored::*;
use std::io;

/// The main entry point of the `appdo` application.
/// It sets up logging, parses arguments, dispatches, and performs centralized error handling.
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("CLI args parsed: {:?}", cli);

    let config_paths = paths::default_config_paths(&UserDbHomeResolver);
    let result = cli::dispatch(&cli, &config_paths, &ExecLauncher, &mut io::stdout().lock());

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // --- Centralized Error Handling ---
            // A failed exec gets the status a shell would report for it.
            let code = e
                .downcast_ref::<LaunchError>()
                .map_or(1, LaunchError::exit_code);
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(code);
        }
    }
}
