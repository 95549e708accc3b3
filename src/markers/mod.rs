//! Lifecycle marker files.
//!
//! # Data Flow
//! ```text
//! lifecycle phase change
//!     → Marker (server_started | signal_<NAME> | shutdown_complete)
//!     → MarkerWriter::record (skipped when no directory is configured)
//!     → <MARKER_DIR>/.<name>.tmp → rename → <MARKER_DIR>/<name>
//! ```
//!
//! # Design Decisions
//! - Writes are best-effort: failures are logged, never propagated
//! - The rename makes a marker appear with its full content or not at all
//! - The directory is owned by the harness and is never created here

use std::fmt;
use std::path::{Path, PathBuf};

/// A lifecycle event recorded on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// The listener is bound and serving.
    ServerStarted,
    /// A termination signal arrived; carries the signal name, e.g. `SIGTERM`.
    Signal(String),
    /// The listener is closed and the process is about to exit.
    ShutdownComplete,
}

impl Marker {
    /// File name of the marker, which is also its content.
    pub fn file_name(&self) -> String {
        match self {
            Marker::ServerStarted => "server_started".to_string(),
            Marker::Signal(name) => format!("signal_{name}"),
            Marker::ShutdownComplete => "shutdown_complete".to_string(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Error type for marker writes.
#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    #[error("failed to write marker {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes markers into an optional directory.
#[derive(Debug, Clone, Default)]
pub struct MarkerWriter {
    dir: Option<PathBuf>,
}

impl MarkerWriter {
    /// `None` or an empty path disables marker writing.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir: dir.filter(|d| !d.as_os_str().is_empty()),
        }
    }

    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Write a marker. Returns the final path, or `None` when disabled.
    pub async fn write(&self, marker: &Marker) -> Result<Option<PathBuf>, MarkerError> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };

        let name = marker.file_name();
        let path = dir.join(&name);
        let staging = dir.join(format!(".{name}.tmp"));

        if let Err(source) = tokio::fs::write(&staging, name.as_bytes()).await {
            return Err(MarkerError::Write {
                path: staging,
                source,
            });
        }
        if let Err(source) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(MarkerError::Write { path, source });
        }

        Ok(Some(path))
    }

    /// Best-effort write: success is logged at debug, failure at warn.
    pub async fn record(&self, marker: &Marker) {
        match self.write(marker).await {
            Ok(Some(path)) => {
                tracing::debug!(marker = %marker, path = %path.display(), "Marker written");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(marker = %marker, error = %e, "Failed to write marker");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(Marker::ServerStarted.file_name(), "server_started");
        assert_eq!(Marker::Signal("SIGTERM".into()).file_name(), "signal_SIGTERM");
        assert_eq!(Marker::ShutdownComplete.file_name(), "shutdown_complete");
    }

    #[tokio::test]
    async fn content_equals_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MarkerWriter::new(Some(dir.path().to_path_buf()));

        let path = writer
            .write(&Marker::Signal("SIGTERM".into()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("signal_SIGTERM"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "signal_SIGTERM");
    }

    #[tokio::test]
    async fn no_staging_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MarkerWriter::new(Some(dir.path().to_path_buf()));
        writer.write(&Marker::ServerStarted).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["server_started".to_string()]);
    }

    #[tokio::test]
    async fn disabled_writer_is_a_no_op() {
        let writer = MarkerWriter::new(Some(PathBuf::new()));
        assert!(!writer.is_enabled());
        assert!(writer.write(&Marker::ServerStarted).await.unwrap().is_none());
        assert!(MarkerWriter::disabled()
            .write(&Marker::ShutdownComplete)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MarkerWriter::new(Some(dir.path().join("absent")));

        let err = writer.write(&Marker::ServerStarted).await.unwrap_err();
        let MarkerError::Write { source, .. } = err;
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);

        // record swallows the same failure
        writer.record(&Marker::ServerStarted).await;
    }
}
