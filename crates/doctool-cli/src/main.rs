//! doctool CLI - post-generation setup for Pandoc documentation projects
//!
//! Main entry point for the `doctool` binary.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

mod cli;
mod commands;
mod error;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    // Every task runs in sequence, so a single-threaded runtime is enough.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(cli.execute()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("{}", e.render());
            e.exit_code()
        }
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .init();
}
