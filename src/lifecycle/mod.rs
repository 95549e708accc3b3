//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Install SIGTERM handler → [startup delay] → Bind → server_started
//!
//! Signals (signals.rs):
//!     SIGTERM → named event for the drain sequence
//!
//! Shutdown (shutdown.rs):
//!     First signal → signal_<NAME> → wait → close listener
//!
//! State (state.rs):
//!     Starting → Running → Draining → Closed → shutdown_complete
//! ```
//!
//! # Design Decisions
//! - One `ServerState` per process, owned by the startup task and lent to the drain
//! - Each marker is awaited before the next step starts
//! - A repeated SIGTERM during the drain is logged and ignored
//! - Nothing shortens the drain once it has started

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

pub use shutdown::{drain_on_signal, Shutdown};
pub use signals::{ChannelSignals, SignalSource, TerminationSignals};
pub use startup::{run, run_with_signals, Outcome};
pub use state::{Phase, ServerState, TransitionError};
