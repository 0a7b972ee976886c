//! Error types for the bitly client.
//!
//! # Design
//! Two runtime failure kinds: the transport could not complete the
//! round-trip, or the service answered with a non-2xx status. `InvalidProxy`
//! can only occur at client construction, when the proxy URI is rejected.
//! URL encoding is total and has no error variant.

use std::fmt;

/// Errors returned by `BitlyClient`.
#[derive(Debug)]
pub enum BitlyError {
    /// The service returned a non-2xx status. The body carries the
    /// plain-text error code bitly sends in `format=txt` mode.
    Http { status: u16, body: String },

    /// The request could not complete: connection refused, timeout, TLS
    /// failure, or the response body could not be read.
    Transport(String),

    /// The configured proxy URI was rejected by the transport.
    InvalidProxy(String),
}

impl fmt::Display for BitlyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitlyError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            BitlyError::Transport(msg) => {
                write!(f, "transport error: {msg}")
            }
            BitlyError::InvalidProxy(msg) => {
                write!(f, "invalid proxy configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for BitlyError {}
