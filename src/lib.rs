//! Loopback HTTP fixture with an observable graceful shutdown.
//!
//! Binds `127.0.0.1:<port>`, answers every request with `200`, and on SIGTERM
//! waits `SHUTDOWN_WAIT_SECONDS` before closing. With `MARKER_DIR` set, each
//! lifecycle step leaves a file behind so an external harness can check the
//! order and timing of startup and shutdown.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod markers;
pub mod net;
pub mod observability;

pub use config::FixtureConfig;
pub use error::FixtureError;
pub use http::HttpServer;
pub use lifecycle::{Outcome, ServerState, Shutdown};
pub use markers::{Marker, MarkerWriter};
