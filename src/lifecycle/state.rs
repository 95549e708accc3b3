//! Server phase tracking.
//!
//! `Starting → Running → Draining → Closed`, each step taken at most once and
//! followed by its marker write.

use std::fmt;
use std::net::SocketAddr;

use crate::markers::{Marker, MarkerWriter};

/// Phase of the fixture's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Process started, listener not bound yet.
    Starting,
    /// Listener bound and serving.
    Running,
    /// Termination signal received, waiting out the drain delay.
    Draining,
    /// Listener closed.
    Closed,
}

impl Phase {
    /// The only phase this one may move to.
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Starting => Some(Phase::Running),
            Phase::Running => Some(Phase::Draining),
            Phase::Draining => Some(Phase::Closed),
            Phase::Closed => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Starting => "starting",
            Phase::Running => "running",
            Phase::Draining => "draining",
            Phase::Closed => "closed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal phase change {from} -> {to}")]
pub struct TransitionError {
    pub from: Phase,
    pub to: Phase,
}

/// Everything the process knows about its one server instance.
#[derive(Debug)]
pub struct ServerState {
    phase: Phase,
    local_addr: Option<SocketAddr>,
    markers: MarkerWriter,
}

impl ServerState {
    pub fn new(markers: MarkerWriter) -> Self {
        Self {
            phase: Phase::Starting,
            local_addr: None,
            markers,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Address the listener bound to, once running.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    pub fn markers(&self) -> &MarkerWriter {
        &self.markers
    }

    /// Move to `next` if it is the successor of the current phase.
    pub fn advance(&mut self, next: Phase) -> Result<(), TransitionError> {
        if self.phase.successor() != Some(next) {
            return Err(TransitionError {
                from: self.phase,
                to: next,
            });
        }
        tracing::debug!(from = %self.phase, to = %next, "Phase change");
        self.phase = next;
        Ok(())
    }

    /// `Starting → Running`, then the `server_started` marker.
    pub async fn mark_running(&mut self, local_addr: SocketAddr) -> Result<(), TransitionError> {
        self.advance(Phase::Running)?;
        self.local_addr = Some(local_addr);
        self.markers.record(&Marker::ServerStarted).await;
        Ok(())
    }

    /// `Running → Draining`, then the `signal_<NAME>` marker.
    pub async fn mark_draining(&mut self, signal: &str) -> Result<(), TransitionError> {
        self.advance(Phase::Draining)?;
        self.markers.record(&Marker::Signal(signal.to_string())).await;
        Ok(())
    }

    /// `Draining → Closed`, then the `shutdown_complete` marker.
    pub async fn mark_closed(&mut self) -> Result<(), TransitionError> {
        self.advance(Phase::Closed)?;
        self.markers.record(&Marker::ShutdownComplete).await;
        Ok(())
    }
}
