//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request tracing)
//!     → fallback handler: 200 "\n" for every method and path
//!     → Send to client
//! ```

pub mod server;

pub use server::HttpServer;
