//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the termination handler
//! - Bind the listener and record `server_started`
//! - Serve and drain side by side on the current task
//! - Record `shutdown_complete` once the listener has closed
//!
//! # Design Decisions
//! - Fail fast: a bind error ends the process before any marker is written
//! - Signals are registered before binding so none is lost after `server_started`
//! - No spawned tasks; serve and drain are polled together on one task

use std::time::Duration;

use crate::config::FixtureConfig;
use crate::error::FixtureError;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::{drain_on_signal, Shutdown};
use crate::lifecycle::signals::{SignalSource, TerminationSignals};
use crate::lifecycle::state::ServerState;
use crate::markers::MarkerWriter;
use crate::net::Listener;

/// How the fixture finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Drained and closed after a termination signal.
    Completed,
    /// The `die_after` deadline hit first.
    SelfDestructed,
}

/// Run the fixture against real OS signals.
pub async fn run(config: FixtureConfig) -> Result<Outcome, FixtureError> {
    let signals = TerminationSignals::install().map_err(FixtureError::Signal)?;
    run_with_signals(config, signals, |_| {}).await
}

/// Run the fixture with an arbitrary signal source.
///
/// `on_running` is called with the bound address right after the
/// `server_started` marker is written.
pub async fn run_with_signals<S, F>(
    config: FixtureConfig,
    signals: S,
    on_running: F,
) -> Result<Outcome, FixtureError>
where
    S: SignalSource,
    F: FnOnce(std::net::SocketAddr),
{
    let lifecycle = serve_until_closed(&config, signals, on_running);

    let Some(die_after) = config.startup.die_after else {
        return lifecycle.await;
    };

    tokio::select! {
        result = lifecycle => result,
        () = tokio::time::sleep(die_after) => {
            tracing::warn!(
                die_after_ms = die_after.as_millis() as u64,
                "Self-destruct deadline reached"
            );
            Ok(Outcome::SelfDestructed)
        }
    }
}

async fn serve_until_closed<S, F>(
    config: &FixtureConfig,
    mut signals: S,
    on_running: F,
) -> Result<Outcome, FixtureError>
where
    S: SignalSource,
    F: FnOnce(std::net::SocketAddr),
{
    let mut state = ServerState::new(MarkerWriter::new(config.markers.dir.clone()));

    if config.startup.delay > Duration::ZERO {
        tracing::info!(
            delay_ms = config.startup.delay.as_millis() as u64,
            "Delaying listener bind"
        );
        tokio::time::sleep(config.startup.delay).await;
    }

    let listener = Listener::bind(&config.listener).await?;
    let local_addr = listener.local_addr();

    state.mark_running(local_addr).await?;
    tracing::info!(
        address = %local_addr,
        shutdown_wait_secs = config.shutdown.wait.as_secs(),
        marker_dir = ?state.markers().dir(),
        "Server is running"
    );
    on_running(local_addr);

    let shutdown = Shutdown::new();
    let server = HttpServer::new();
    let serve = server.run(listener.into_inner(), shutdown.closed());
    tokio::pin!(serve);

    tokio::select! {
        served = &mut serve => {
            served.map_err(FixtureError::Serve)?;
            return Err(FixtureError::Serve(std::io::Error::other(
                "server stopped before shutdown was requested",
            )));
        }
        drained = drain_on_signal(&mut signals, &mut state, config.shutdown.wait, &shutdown) => {
            drained?;
        }
    }

    // Returns once the listener is closed and in-flight requests are done.
    serve.await.map_err(FixtureError::Serve)?;
    tracing::info!("Server closed");

    state.mark_closed().await?;
    tracing::info!("Shutdown complete");
    Ok(Outcome::Completed)
}
