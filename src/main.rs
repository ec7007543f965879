//! `waitfor` — block a pipeline step until HTTP dependencies are ready.
//!
//! Exit codes: 0 when every check passed (or was skipped), 1 when the run
//! failed, 2 when the configuration could not be loaded.

use std::process::ExitCode;

use clap::Parser;

use waitfor::cli::Cli;
use waitfor::observability::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("waitfor: {}", e);
            return ExitCode::from(2);
        }
    };

    init_logging(config.verbosity());

    match waitfor::run_config(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
