//! Loopback TCP listener.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// A bound TCP listener together with the address it actually got.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr = config.bind_address();
        let bind_err = |source| ListenerError::Bind { addr, source };

        let inner = TcpListener::bind(addr).await.map_err(bind_err)?;
        let local_addr = inner.local_addr().map_err(bind_err)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Give up the wrapper and hand the socket to the HTTP server.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
