//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (127.0.0.1:<port>)
//!     → listener.rs (bind, report the real local address)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - A bind failure is the only fatal runtime error of the fixture
//! - The bound address is read back so port 0 reports the assigned port

pub mod listener;

pub use listener::{Listener, ListenerError};
