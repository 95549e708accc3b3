//! Configuration resolution from the command line and environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::cli::Cli;
use crate::config::schema::{
    FixtureConfig, ListenerConfig, MarkerConfig, ShutdownConfig, StartupConfig,
    DEFAULT_SHUTDOWN_WAIT,
};

pub const PORT_ENV: &str = "PORT";
pub const SHUTDOWN_WAIT_ENV: &str = "SHUTDOWN_WAIT_SECONDS";
pub const MARKER_DIR_ENV: &str = "MARKER_DIR";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no port given: pass it as the first argument or set $PORT")]
    MissingPort,

    #[error("invalid $PORT value {0:?}: expected an integer in 0..=65535")]
    InvalidPort(String),
}

/// Resolve the configuration against the real process environment.
pub fn load_from_env(cli: &Cli) -> Result<FixtureConfig, ConfigError> {
    load_config(cli, |key| std::env::var(key).ok())
}

/// Resolve the configuration, reading environment variables through `env`.
pub fn load_config<F>(cli: &Cli, env: F) -> Result<FixtureConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match cli.port {
        Some(port) => port,
        None => {
            let raw = env(PORT_ENV).ok_or(ConfigError::MissingPort)?;
            raw.trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?
        }
    };

    let wait = match cli.shutdown_wait {
        Some(secs) => Duration::from_secs(secs),
        None => parse_wait(env(SHUTDOWN_WAIT_ENV).as_deref()),
    };

    let marker_dir = cli
        .marker_dir
        .clone()
        .or_else(|| env(MARKER_DIR_ENV).map(PathBuf::from))
        .filter(|dir| !dir.as_os_str().is_empty());

    Ok(FixtureConfig {
        listener: ListenerConfig {
            port,
            ..ListenerConfig::default()
        },
        shutdown: ShutdownConfig { wait },
        markers: MarkerConfig { dir: marker_dir },
        startup: StartupConfig {
            delay: Duration::from_millis(cli.startup_delay_ms),
            die_after: cli.die_after_ms.map(Duration::from_millis),
        },
    })
}

/// Parse the drain wait in whole seconds. Anything unusable yields the default.
fn parse_wait(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return DEFAULT_SHUTDOWN_WAIT;
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => {
            tracing::warn!(
                value = %raw,
                default_secs = DEFAULT_SHUTDOWN_WAIT.as_secs(),
                "Unparsable SHUTDOWN_WAIT_SECONDS, using default"
            );
            DEFAULT_SHUTDOWN_WAIT
        }
    }
}
