//! Shutdown coordination and the drain sequence.

use std::time::Duration;

use tokio::sync::broadcast;

use crate::lifecycle::signals::SignalSource;
use crate::lifecycle::state::{ServerState, TransitionError};

/// Coordinator for closing the listener.
///
/// Provides a broadcast channel the HTTP server subscribes to.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the close signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Future that resolves once [`Shutdown::trigger`] is called or the
    /// coordinator is dropped.
    pub fn closed(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut rx = self.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Tell the server to stop accepting and close.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for a termination signal, hold off for `wait`, then trigger `shutdown`.
///
/// Moves `state` to `Draining` as soon as the first signal arrives. Signals
/// received during the wait are logged and otherwise ignored. If the source
/// ends before any signal, this never returns.
pub async fn drain_on_signal<S: SignalSource>(
    signals: &mut S,
    state: &mut ServerState,
    wait: Duration,
    shutdown: &Shutdown,
) -> Result<&'static str, TransitionError> {
    let Some(signal) = signals.recv().await else {
        tracing::debug!("Signal source closed, serving until killed");
        return std::future::pending().await;
    };

    tracing::info!(
        signal,
        wait_secs = wait.as_secs_f64(),
        "Termination signal received, waiting before shutting down"
    );
    state.mark_draining(signal).await?;

    let deadline = tokio::time::sleep(wait);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            () = &mut deadline => break,
            Some(again) = signals.recv() => {
                tracing::warn!(signal = again, "Already draining, ignoring signal");
            }
        }
    }

    tracing::info!("Drain delay elapsed, closing listener");
    shutdown.trigger();
    Ok(signal)
}
