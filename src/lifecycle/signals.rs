//! OS signal handling.
//!
//! # Responsibilities
//! - Register the termination handler before the listener binds
//! - Translate each delivery into a named event for the drain sequence
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe, no polling)
//! - Only SIGTERM is handled; every other signal keeps its default action
//! - `SignalSource` is the seam tests use to inject signals without the OS

use std::future::Future;

use tokio::sync::mpsc;

/// A stream of termination requests.
pub trait SignalSource {
    /// Wait for the next termination request and return its name.
    /// `None` means no further signals can arrive.
    fn recv(&mut self) -> impl Future<Output = Option<&'static str>>;
}

/// SIGTERM delivered by the operating system.
#[cfg(unix)]
pub struct TerminationSignals {
    inner: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    pub const NAME: &'static str = "SIGTERM";

    /// Install the handler. Must run inside a Tokio runtime.
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        let inner = signal(SignalKind::terminate())?;
        tracing::debug!(signal = Self::NAME, "Signal handler installed");
        Ok(Self { inner })
    }
}

#[cfg(unix)]
impl SignalSource for TerminationSignals {
    async fn recv(&mut self) -> Option<&'static str> {
        self.inner.recv().await.map(|()| Self::NAME)
    }
}

/// Ctrl+C stands in for SIGTERM where Unix signals do not exist.
#[cfg(not(unix))]
pub struct TerminationSignals {
    _private: (),
}

#[cfg(not(unix))]
impl TerminationSignals {
    pub const NAME: &'static str = "CTRL_C";

    pub fn install() -> std::io::Result<Self> {
        Ok(Self { _private: () })
    }
}

#[cfg(not(unix))]
impl SignalSource for TerminationSignals {
    async fn recv(&mut self) -> Option<&'static str> {
        tokio::signal::ctrl_c().await.ok().map(|()| Self::NAME)
    }
}

/// Channel-fed signal source for in-process callers.
pub struct ChannelSignals {
    rx: mpsc::UnboundedReceiver<&'static str>,
}

impl ChannelSignals {
    /// Returns the source and the handle used to "send" signals into it.
    pub fn new() -> (mpsc::UnboundedSender<&'static str>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<&'static str> {
        self.rx.recv().await
    }
}
