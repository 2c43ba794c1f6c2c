//! FormModeler CLI entry point.
//!
//! Exit codes:
//! - 0: Success, including lookups that found nothing
//! - 1: Error

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use formmodeler::Cli;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("formmodeler=debug,formmodeler_fields=debug,formmodeler_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let exit_code = match formmodeler::run(&cli, &mut stdout) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(exit_code);
}
