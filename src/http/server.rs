//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up request tracing
//! - Serve on a bound listener until told to close

use std::future::Future;

use axum::{http::StatusCode, response::IntoResponse, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Body returned for every request.
pub const RESPONSE_BODY: &str = "\n";

/// HTTP server for the fixture.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new() -> Self {
        Self {
            router: Self::build_router(),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router() -> Router {
        Router::new()
            .fallback(ok_handler)
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on `listener` until `close` resolves.
    ///
    /// After `close` the listener stops accepting; the returned future
    /// completes once in-flight requests have finished.
    pub async fn run<F>(self, listener: TcpListener, close: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::debug!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(close)
            .await?;

        tracing::debug!(address = %addr, "HTTP server stopped");
        Ok(())
    }

    #[cfg(test)]
    fn router(&self) -> Router {
        self.router.clone()
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn ok_handler() -> impl IntoResponse {
    (StatusCode::OK, RESPONSE_BODY)
}
