//! Command line definition.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "shutdown-fixture")]
#[command(about = "Loopback HTTP fixture that records its startup and graceful shutdown", long_about = None)]
pub struct Cli {
    /// TCP port to bind on 127.0.0.1 (falls back to $PORT)
    pub port: Option<u16>,

    /// Seconds to wait between SIGTERM and closing the listener [env: SHUTDOWN_WAIT_SECONDS]
    #[arg(long, value_name = "SECS")]
    pub shutdown_wait: Option<u64>,

    /// Directory that receives lifecycle marker files [env: MARKER_DIR]
    #[arg(long, value_name = "DIR")]
    pub marker_dir: Option<PathBuf>,

    /// Sleep this long before binding the port
    #[arg(long, value_name = "MS", default_value_t = 0)]
    pub startup_delay_ms: u64,

    /// Exit with status 1 after this long, whatever the server is doing
    #[arg(long, value_name = "MS")]
    pub die_after_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_port() {
        let cli = Cli::try_parse_from(["shutdown-fixture", "9001"]).unwrap();
        assert_eq!(cli.port, Some(9001));
        assert_eq!(cli.startup_delay_ms, 0);
        assert!(cli.die_after_ms.is_none());
    }

    #[test]
    fn port_is_optional() {
        let cli = Cli::try_parse_from(["shutdown-fixture"]).unwrap();
        assert!(cli.port.is_none());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Cli::try_parse_from(["shutdown-fixture", "http"]).is_err());
        assert!(Cli::try_parse_from(["shutdown-fixture", "70000"]).is_err());
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "shutdown-fixture",
            "--shutdown-wait",
            "2",
            "--marker-dir",
            "/tmp/m",
            "--startup-delay-ms",
            "150",
            "--die-after-ms",
            "3000",
            "8080",
        ])
        .unwrap();
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.shutdown_wait, Some(2));
        assert_eq!(cli.marker_dir, Some(PathBuf::from("/tmp/m")));
        assert_eq!(cli.startup_delay_ms, 150);
        assert_eq!(cli.die_after_ms, Some(3000));
    }
}
