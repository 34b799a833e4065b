//! Listener lifecycle: bind the socket, then serve the ping router on it
//! until the process dies.
//!
//! Binding and serving are split so a bind failure is reported before
//! anything is served, and so tests can hand in a listener on an ephemeral
//! port.

use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::{api, error::ServerError};

/// Bind `0.0.0.0:<port>`.
pub async fn bind(port: u16) -> Result<TcpListener, ServerError> {
    bind_addr(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))).await
}

/// Bind an explicit address. Failure is fatal and never retried.
pub async fn bind_addr(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the application on an already-bound listener.
///
/// Only returns if the accept loop fails; each connection runs on its own task.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    let app = api::router().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
            .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
    );

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
