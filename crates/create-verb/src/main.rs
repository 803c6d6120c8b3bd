//! create-verb CLI - scaffold a new Verb fullstack application
//!
//! This is the main entry point for the `create-verb` command.

mod cli;
mod create;
mod output;
mod version;

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, EarlyExit};

#[tokio::main]
async fn main() -> ExitCode {
    match cli::early_exit(std::env::args_os().skip(1)) {
        Some(EarlyExit::Help) => return print_help(),
        Some(EarlyExit::Version) => return print_version(),
        None => {}
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if cli.version {
        return print_version();
    }

    init_tracing(cli.verbose, cli.quiet);

    match create::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("Unexpected error: {:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn print_help() -> ExitCode {
    println!("{}", version::display());
    println!();
    match Cli::command().print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn print_version() -> ExitCode {
    println!("{}", version::display());
    ExitCode::SUCCESS
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Terminal output already reports progress; logs are opt-in
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
