//! Error types for pledge-profile.

use pledge_core::Abandoned;
use thiserror::Error;

/// Failure of a profile lookup, generic over the transport's error type.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The HTTP call itself failed; the client's error is kept as-is.
    #[error("transport error")]
    Transport(#[source] E),

    /// The service answered but reported a failure in the body.
    #[error("Failed to get GitHub profile: {message}")]
    Remote { message: String },

    #[error("unexpected response body: expected a JSON object, got {0}")]
    UnexpectedBody(&'static str),

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Abandoned(#[from] Abandoned),
}

impl<E> Error<E> {
    /// The transport error, if this failure came from the transport.
    pub fn transport(&self) -> Option<&E> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }

    /// Message text reported by the remote service, if any.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::Remote { message } => Some(message),
            _ => None,
        }
    }
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
