//! Startup and serving errors for pingd.
//!
//! The ping handler itself cannot fail, so every error here belongs to the
//! listener: either the socket could not be acquired ([`ServerError::Bind`])
//! or the accept loop died afterwards ([`ServerError::Serve`]). Both are
//! fatal. `main` logs them and exits non-zero; nothing is retried.

use std::{io, net::SocketAddr};

/// Fatal listener errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not acquire the configured address
    /// (port already in use, insufficient privilege, ...).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The accept loop stopped with an I/O error after startup.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl ServerError {
    /// `true` when the address was already taken by another listener.
    pub fn is_addr_in_use(&self) -> bool {
        matches!(
            self,
            Self::Bind { source, .. } if source.kind() == io::ErrorKind::AddrInUse
        )
    }
}
