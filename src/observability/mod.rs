//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (lifecycle, markers, requests via TraceLayer)
//!     → logging.rs subscriber
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - stdout stays free for whatever the harness wants to capture
//! - Log level configurable through `RUST_LOG`

pub mod logging;
