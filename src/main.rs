//! `shutdown-fixture` entry point.
//!
//! ```text
//! shutdown-fixture <PORT>
//!   SHUTDOWN_WAIT_SECONDS  drain delay after SIGTERM (default 5)
//!   MARKER_DIR             where to write lifecycle markers (unset: none)
//! ```
//!
//! Exits 0 after `shutdown_complete`, 1 on a bind/config failure or when
//! `--die-after-ms` fires.

use std::process::ExitCode;

use clap::Parser;
use shutdown_fixture::config::{self, Cli};
use shutdown_fixture::lifecycle::{self, Outcome};
use shutdown_fixture::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    let config = config::load_from_env(&cli)?;
    tracing::debug!(?config, "Configuration loaded");

    let outcome = match lifecycle::run(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Fixture failed");
            return Err(e.into());
        }
    };

    match outcome {
        Outcome::Completed => Ok(ExitCode::SUCCESS),
        Outcome::SelfDestructed => Ok(ExitCode::FAILURE),
    }
}
