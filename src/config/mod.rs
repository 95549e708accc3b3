//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! argv ─────────▶ cli.rs (clap parse)
//!                     │
//! environment ───▶ loader.rs (PORT, SHUTDOWN_WAIT_SECONDS, MARKER_DIR)
//!                     │
//!                     ▼
//!              FixtureConfig (immutable, owned by startup)
//! ```
//!
//! # Design Decisions
//! - CLI flag wins over environment, environment wins over default
//! - A bad wait value falls back to the default; a bad port is fatal
//! - Loading takes an env lookup closure so tests never mutate the process env

pub mod cli;
pub mod loader;
pub mod schema;

pub use cli::Cli;
pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{FixtureConfig, ListenerConfig, MarkerConfig, ShutdownConfig, StartupConfig};
