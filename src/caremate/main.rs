//! Binary entry point. Everything beyond logging setup lives in [`cli`].

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

/// Overrides the log filter, e.g. `CAREMATE_LOG=caremate=trace`.
const LOG_ENV: &str = "CAREMATE_LOG";

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "caremate=debug"
    } else {
        "caremate=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
