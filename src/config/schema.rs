//! Configuration schema definitions.
//!
//! Every section has a `Default` so a bare port is a complete configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Wait applied between the termination signal and closing the listener when
/// nothing usable is configured.
pub const DEFAULT_SHUTDOWN_WAIT: Duration = Duration::from_secs(5);

/// Root configuration for the fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Where to listen.
    pub listener: ListenerConfig,

    /// Drain timing.
    pub shutdown: ShutdownConfig,

    /// Marker file output.
    pub markers: MarkerConfig,

    /// Pre-bind behaviour.
    pub startup: StartupConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Always loopback outside of tests.
    pub host: IpAddr,

    /// Port 0 asks the OS for an ephemeral port.
    pub port: u16,
}

impl ListenerConfig {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        }
    }
}

/// Shutdown configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownConfig {
    /// Delay between the termination signal and closing the listener.
    pub wait: Duration,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            wait: DEFAULT_SHUTDOWN_WAIT,
        }
    }
}

/// Marker file configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerConfig {
    /// `None` disables marker writing entirely.
    pub dir: Option<PathBuf>,
}

/// Startup configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    /// Sleep before binding.
    pub delay: Duration,

    /// Hard deadline after which the process exits with status 1.
    pub die_after: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FixtureConfig::default();
        assert_eq!(config.listener.bind_address().to_string(), "127.0.0.1:0");
        assert_eq!(config.shutdown.wait, Duration::from_secs(5));
        assert!(config.markers.dir.is_none());
        assert_eq!(config.startup.delay, Duration::ZERO);
        assert!(config.startup.die_after.is_none());
    }
}
