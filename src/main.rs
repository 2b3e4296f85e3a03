//! Pricetag CLI

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::error;

use crate::cli::Cli;

mod cli;
mod logging;

fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(init_error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    match cli.run(&mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            error!(error = %run_error, "command failed");

            #[expect(
                clippy::print_stderr,
                reason = "command errors are user-facing, not only log events"
            )]
            {
                eprintln!("Error: {run_error}");
            }

            ExitCode::FAILURE
        }
    }
}
