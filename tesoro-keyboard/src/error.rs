//! Keyboard interface error types

use tesoro_transport::TransportError;
use thiserror::Error;

/// Errors from keyboard operations
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// Command issued before a successful initialize, or after close.
    /// Fatal to the call, not the session; initialize and retry.
    #[error("keyboard is not initialized")]
    NotInitialized,

    /// Transport layer error
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
