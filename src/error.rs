//! Crate-level error type.
//!
//! Only failures that stop the fixture from starting live here. Marker write
//! failures are handled where they happen and never surface as a `FixtureError`.

use crate::config::ConfigError;
use crate::lifecycle::state::TransitionError;
use crate::net::ListenerError;

/// Fatal error returned from [`crate::lifecycle::startup::run`].
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("failed to install signal handler: {0}")]
    Signal(#[source] std::io::Error),

    #[error("HTTP server failed: {0}")]
    Serve(#[source] std::io::Error),
}
